// templates/pages/home.rs

use crate::templates::page_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    page_layout(
        "steamslack",
        html! {
            h1 { "steamslack" }

            p {
                "A Slack bridge for the guild: who's on Steam, who's on the "
                "ladder, who's lifting, and which trade searches turned up "
                "something new."
            }

            p {
                "Slash commands are documented on the "
                a href="/slack" { "commands page" }
                "."
            }
        },
    )
}
