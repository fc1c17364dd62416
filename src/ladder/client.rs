use crate::errors::ServerError;
use crate::ladder::models::{Ladder, LadderEntry};
use reqwest::blocking::Client;
use std::time::Duration;

const LADDER_BASE_URL: &str = "http://api.pathofexile.com/ladders";

pub struct LadderClient {
    client: Client,
}

impl LadderClient {
    pub fn new() -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ServerError::Upstream(e.to_string()))?;

        Ok(Self { client })
    }

    /// Top `limit` entries of the league ladder (the API caps a single
    /// page at 200).
    pub fn fetch_ladder(&self, league: &str, limit: u32) -> Result<Vec<LadderEntry>, ServerError> {
        let url = format!("{LADDER_BASE_URL}/{league}");
        let limit = limit.to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[("type", "league"), ("limit", limit.as_str())])
            .send()
            .map_err(|e| ServerError::Upstream(format!("Ladder request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ServerError::Upstream(format!(
                "Ladder HTTP {}: {}",
                status, text
            )));
        }

        let parsed: Ladder = resp
            .json()
            .map_err(|e| ServerError::Upstream(format!("Ladder JSON parse failed: {e}")))?;

        Ok(parsed.entries)
    }
}
