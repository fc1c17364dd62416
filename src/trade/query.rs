use serde_json::{json, Map, Value};

/// League every watch searches in.
pub const LEAGUE: &str = "Talisman";

/// Hard cap on hits per query; result sets are small by design.
pub const RESULT_CAP: u32 = 100;

/// Turns a watch's stored rule pairs into the search engine's query
/// document. Base filters pin the league, require verified shops and
/// throw out listings priced in junk currency; each rule adds one term
/// filter on top. Rule content is passed through untouched.
pub fn build_search_document(rules: &[(String, String)]) -> Value {
    let mut must: Vec<Value> = vec![
        term("attributes.league", LEAGUE),
        term("shop.verified", "yes"),
    ];

    for (field, value) in rules {
        must.push(term(field, value));
    }

    json!({
        "query": {
            "filtered": {
                "filter": {
                    "bool": {
                        "must": must,
                        "must_not": [
                            { "terms": { "shop.currency": ["NONE", "Unknown"] } }
                        ]
                    }
                }
            }
        },
        "size": RESULT_CAP
    })
}

fn term(field: &str, value: &str) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), Value::String(value.to_string()));
    json!({ "term": inner })
}
