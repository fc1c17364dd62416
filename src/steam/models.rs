use serde::Deserialize;

// GetPlayerSummaries v0002 response shape:
//
// response
//  └── players[]
//       ├── steamid
//       ├── personaname
//       ├── personastate          (0..4)
//       ├── communityvisibilitystate
//       └── gameextrainfo         (only while in a game)

#[derive(Debug, Deserialize)]
pub struct PlayerSummaries {
    pub response: PlayerList,
}

#[derive(Debug, Deserialize)]
pub struct PlayerList {
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct Player {
    pub steamid: Option<String>,
    pub personaname: Option<String>,
    pub personastate: Option<i64>,
    pub communityvisibilitystate: Option<i64>,
    pub gameextrainfo: Option<String>,
}
