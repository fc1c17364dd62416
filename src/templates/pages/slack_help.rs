// templates/pages/slack_help.rs

use crate::templates::page_layout;
use maud::{html, Markup};

pub fn slack_help_page() -> Markup {
    page_layout(
        "Commands",
        html! {
            h1 { "Slash commands" }

            dl {
                dt { code { "/steam" } }
                dd { "Posts everyone's Steam status (online, in-game, or paranoid) to the channel." }

                dt { code { "/ladder" } }
                dd { "Posts guild characters' league ladder standings to the channel." }

                dt { code { "/lift <bench|squat|deadlift> [reps]" } }
                dd {
                    "Puts in a set at the gym. Gains are random and injuries happen. "
                    code { "/lift status" }
                    " shows your current numbers."
                }

                dt { code { "/watch <title> | <field=value, ...> | <url-path>" } }
                dd {
                    "Registers a trade search to poll for new listings. "
                    code { "/watch watches" }
                    " lists registered searches, "
                    code { "/watch unwatch <title>" }
                    " removes one."
                }
            }
        },
    )
}
