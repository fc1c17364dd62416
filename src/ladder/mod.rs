mod client;
mod experience;
mod models;
mod report;

pub use client::LadderClient;
pub use experience::progress_to_next;
pub use models::LadderEntry;
pub use report::{ladder_fields, post_ladder_report};
