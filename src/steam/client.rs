use crate::errors::ServerError;
use crate::steam::models::{Player, PlayerSummaries};
use reqwest::blocking::Client;
use std::time::Duration;

const PLAYER_SUMMARIES_URL: &str =
    "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/";

pub struct SteamClient {
    client: Client,
    api_key: String,
}

impl SteamClient {
    pub fn new() -> Result<Self, ServerError> {
        let api_key = std::env::var("STEAM_API_KEY").map_err(|_| {
            ServerError::Config("STEAM_API_KEY environment variable not set".into())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ServerError::Upstream(e.to_string()))?;

        Ok(Self { client, api_key })
    }

    /// One batched lookup for every registered steam id.
    pub fn get_player_summaries(&self, steam_ids: &[String]) -> Result<Vec<Player>, ServerError> {
        let ids = steam_ids.join(",");
        let resp = self
            .client
            .get(PLAYER_SUMMARIES_URL)
            .query(&[("key", self.api_key.as_str()), ("steamids", ids.as_str())])
            .send()
            .map_err(|e| ServerError::Upstream(format!("Steam request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ServerError::Upstream(format!(
                "Steam HTTP {}: {}",
                status, text
            )));
        }

        let parsed: PlayerSummaries = resp
            .json()
            .map_err(|e| ServerError::Upstream(format!("Steam JSON parse failed: {e}")))?;

        Ok(parsed.response.players)
    }
}
