use crate::db::{users, Database};
use crate::errors::ServerError;
use crate::slack::{self, Attachment, Field, Message};
use crate::steam::models::Player;
use crate::steam::SteamClient;

fn persona_state_label(state: i64) -> &'static str {
    match state {
        0 => "Offline",
        1 => "Online",
        2 => "Busy",
        3 => "Away",
        4 => "Snooze",
        _ => "Unknown",
    }
}

/// One field per player, sorted by name. Being in a game beats the
/// persona state, and a fully private profile gets called out.
pub fn player_fields(players: &[Player]) -> Vec<Field> {
    let mut fields: Vec<Field> = players
        .iter()
        .map(|p| {
            let title = p
                .personaname
                .clone()
                .unwrap_or_else(|| "(unknown)".to_string());

            let value = if let Some(game) = &p.gameextrainfo {
                format!("Playing {game}")
            } else if p.communityvisibilitystate == Some(1) {
                "Paranoid - We'll never know!".to_string()
            } else {
                persona_state_label(p.personastate.unwrap_or(0)).to_string()
            };

            Field {
                title,
                value,
                short: false,
            }
        })
        .collect();

    fields.sort_by_key(|f| f.title.to_lowercase());
    fields
}

/// Full status report: stored steam ids -> player summaries -> one
/// attachment posted to the channel the command came from.
pub fn post_status_report(db: &Database, channel: &str) -> Result<(), ServerError> {
    let steam_ids = users::list_steam_ids(db)?;
    if steam_ids.is_empty() {
        return Err(ServerError::BadRequest(
            "no steam ids registered yet".into(),
        ));
    }

    let client = SteamClient::new()?;
    let players = client.get_player_summaries(&steam_ids)?;

    let message = Message {
        channel: Some(format!("#{channel}")),
        text: None,
        attachments: vec![Attachment {
            color: Some("#cccccc".to_string()),
            fields: player_fields(&players),
            ..Attachment::new("Shit's broke")
        }],
    };

    slack::post_webhook(&message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, state: i64) -> Player {
        Player {
            steamid: Some("76561197982429034".to_string()),
            personaname: Some(name.to_string()),
            personastate: Some(state),
            communityvisibilitystate: Some(3),
            gameextrainfo: None,
        }
    }

    #[test]
    fn fields_sort_case_insensitively_by_name() {
        let players = vec![player("zeke", 1), player("Alice", 0), player("bob", 4)];
        let fields = player_fields(&players);

        let names: Vec<&str> = fields.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "zeke"]);
        assert_eq!(fields[0].value, "Offline");
        assert_eq!(fields[2].value, "Online");
    }

    #[test]
    fn in_game_beats_persona_state_and_privacy() {
        let mut p = player("davefish", 3);
        p.gameextrainfo = Some("Path of Exile".to_string());
        p.communityvisibilitystate = Some(1);

        let fields = player_fields(&[p]);
        assert_eq!(fields[0].value, "Playing Path of Exile");
    }

    #[test]
    fn private_profile_gets_the_paranoid_line() {
        let mut p = player("sarahfitz", 0);
        p.communityvisibilitystate = Some(1);

        let fields = player_fields(&[p]);
        assert_eq!(fields[0].value, "Paranoid - We'll never know!");
    }

    #[test]
    fn missing_state_defaults_to_offline() {
        let mut p = player("rob", 0);
        p.personastate = None;

        let fields = player_fields(&[p]);
        assert_eq!(fields[0].value, "Offline");
    }
}
