use crate::trade::models::Listing;
use crate::trade::TradeError;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const SEARCH_ENDPOINT: &str = "http://api.exiletools.com/index/_search";

// Hit shape, the parts we project:
//
// _source
//  ├── info
//  │    └── fullName
//  └── shop
//       ├── amount
//       ├── currency
//       ├── sellerAccount
//       ├── threadid
//       └── chaosEquiv

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Option<HitList>,
}

#[derive(Debug, Deserialize)]
struct HitList {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source")]
    source: Option<HitSource>,
}

#[derive(Debug, Deserialize)]
struct HitSource {
    info: Option<ItemInfo>,
    shop: Option<ShopInfo>,
}

#[derive(Debug, Deserialize)]
struct ItemInfo {
    #[serde(rename = "fullName")]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShopInfo {
    amount: Option<f64>,
    currency: Option<String>,
    #[serde(rename = "sellerAccount")]
    seller_account: Option<String>,
    threadid: Option<i64>,
    #[serde(rename = "chaosEquiv")]
    chaos_equiv: Option<f64>,
}

pub struct TradeSearcher {
    client: Client,
}

impl TradeSearcher {
    pub fn new() -> Result<Self, TradeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| TradeError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fail-soft fetch: any transport or parse problem is logged and
    /// collapses to "this query produced nothing this cycle". Nothing
    /// retries inside a cycle.
    pub fn fetch_listings(&self, search_title: &str, document: &Value) -> Vec<Listing> {
        match self.try_fetch(document) {
            Ok(listings) => listings,
            Err(e) => {
                eprintln!("⚠️ Search for '{search_title}' failed: {e}");
                Vec::new()
            }
        }
    }

    fn try_fetch(&self, document: &Value) -> Result<Vec<Listing>, TradeError> {
        let resp = self
            .client
            .post(SEARCH_ENDPOINT)
            .json(document)
            .send()
            .map_err(|e| TradeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(TradeError::Network(format!(
                "search HTTP {}: {}",
                status, text
            )));
        }

        let parsed: SearchResponse = resp
            .json()
            .map_err(|e| TradeError::JsonParse(e.to_string()))?;

        let hit_list = parsed
            .hits
            .ok_or_else(|| TradeError::UnexpectedShape("hits missing".to_string()))?;

        Ok(hit_list
            .hits
            .iter()
            .filter_map(listing_from_hit)
            .collect())
    }
}

/// Fixed projection of one hit into a Listing. A hit missing any
/// required field is dropped here rather than flowing downstream with
/// holes in it.
pub fn listing_from_hit(hit: &Hit) -> Option<Listing> {
    let source = match &hit.source {
        Some(s) => s,
        None => {
            eprintln!("Skipping hit: missing _source");
            return None;
        }
    };

    let name = source.info.as_ref().and_then(|i| i.full_name.clone());
    let shop = source.shop.as_ref();
    let amount = shop.and_then(|s| s.amount);
    let currency = shop.and_then(|s| s.currency.clone());
    let seller = shop.and_then(|s| s.seller_account.clone());
    let thread = shop.and_then(|s| s.threadid);
    let chaos_equiv = shop.and_then(|s| s.chaos_equiv);

    match (name, amount, currency, seller, thread, chaos_equiv) {
        (Some(name), Some(amount), Some(currency), Some(seller), Some(thread), Some(chaos)) => {
            Some(Listing {
                name,
                buyout: format!("{amount} {currency}"),
                seller,
                thread: thread.to_string(),
                price_in_chaos: chaos,
                price_drop: None,
            })
        }
        _ => {
            eprintln!("Skipping hit: incomplete shop data");
            None
        }
    }
}
