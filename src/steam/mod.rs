mod client;
mod models;
mod status;

pub use client::SteamClient;
pub use models::Player;
pub use status::{player_fields, post_status_report};
