use crate::db::{users, Database};
use crate::errors::ServerError;
use crate::ladder::experience::progress_to_next;
use crate::ladder::models::LadderEntry;
use crate::ladder::LadderClient;
use crate::slack::{self, Attachment, Field, Message};
use crate::trade::query::LEAGUE;

const LADDER_PAGE: u32 = 200;

/// One field per guild character found on the ladder page, in rank
/// order. Accounts match case-insensitively against what people
/// registered.
pub fn ladder_fields(entries: &[LadderEntry], accounts: &[String]) -> Vec<Field> {
    entries
        .iter()
        .filter_map(|entry| {
            let account = entry.account.as_ref()?.name.as_deref()?;
            if !accounts.iter().any(|a| a.eq_ignore_ascii_case(account)) {
                return None;
            }

            let character = entry.character.as_ref()?;
            let name = character.name.as_deref()?;
            let level = character.level.unwrap_or(0);
            let rank = entry.rank.unwrap_or(0);

            let mut value = format!("Rank {rank}, level {level}");
            if let Some(xp) = character.experience {
                if let Some((remaining, pct)) = progress_to_next(level, xp) {
                    value.push_str(&format!(" ({pct:.1}% in, {remaining} xp to next)"));
                }
            }
            if entry.dead == Some(true) {
                value.push_str(" (RIP)");
            }

            Some(Field {
                title: format!("{name} ({account})"),
                value,
                short: false,
            })
        })
        .collect()
}

/// Full ladder report: registered accounts -> league ladder -> one
/// attachment posted to the channel the command came from.
pub fn post_ladder_report(db: &Database, channel: &str) -> Result<(), ServerError> {
    let accounts = users::list_poe_accounts(db)?;
    if accounts.is_empty() {
        return Err(ServerError::BadRequest(
            "no PoE accounts registered yet".into(),
        ));
    }

    let client = LadderClient::new()?;
    let entries = client.fetch_ladder(LEAGUE, LADDER_PAGE)?;

    let fields = ladder_fields(&entries, &accounts);
    let text = if fields.is_empty() {
        Some(format!(
            "Nobody from the guild in the top {LADDER_PAGE} of {LEAGUE}. Keep grinding."
        ))
    } else {
        None
    };

    let message = Message {
        channel: Some(format!("#{channel}")),
        text: None,
        attachments: vec![Attachment {
            color: Some("#af8159".to_string()),
            title: Some(format!("{LEAGUE} ladder")),
            text,
            fields,
            ..Attachment::new("Ladder standings")
        }],
    };

    slack::post_webhook(&message)
}
