pub mod asciimo;
pub mod home;
pub mod slack_help;

pub use asciimo::asciimo_page;
pub use home::home_page;
pub use slack_help::slack_help_page;

use maud::{html, Markup};

/// Shown when a slash command arrives with the wrong shared token.
pub fn bad_token_page() -> Markup {
    html! {
        h2 { "Bad Token" }
    }
}
