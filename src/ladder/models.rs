use serde::Deserialize;

// Ladder API response shape:
//
// ladder
//  ├── total
//  └── entries[]
//       ├── rank
//       ├── dead
//       ├── online
//       ├── character
//       │    ├── name
//       │    ├── level
//       │    └── experience
//       └── account
//            └── name

#[derive(Debug, Deserialize)]
pub struct Ladder {
    pub total: Option<u64>,
    #[serde(default)]
    pub entries: Vec<LadderEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LadderEntry {
    pub rank: Option<u32>,
    pub dead: Option<bool>,
    pub online: Option<bool>,
    pub character: Option<Character>,
    pub account: Option<Account>,
}

#[derive(Debug, Deserialize)]
pub struct Character {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub experience: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Account {
    pub name: Option<String>,
}
