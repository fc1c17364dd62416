use crate::db::{watches as watch_store, Database};
use crate::errors::{ResultResp, ServerError};
use crate::ladder;
use crate::lifting;
use crate::responses::{html_response, text_response};
use crate::steam;
use crate::templates;
use crate::trade::models::WatchQuery;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/asciimo") => html_response(templates::pages::asciimo_page()),
        ("GET", "/slack") => html_response(templates::pages::slack_help_page()),

        ("GET", "/slack/steam") => slack_steam(&req, db),
        ("GET", "/slack/lift") => slack_lift(&req, db),
        ("GET", "/slack/ladder") => slack_ladder(&req, db),
        ("GET", "/slack/watch") => slack_watch(&req, db),

        _ => Err(ServerError::NotFound),
    }
}

/// Steam status: token-gated, does the API round trip off the request
/// thread so the slash command gets its ack immediately.
fn slack_steam(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    if !token_matches(&params)? {
        return html_response(templates::pages::bad_token_page());
    }

    let channel = channel_name(&params);
    let db = db.clone();
    std::thread::spawn(move || {
        if let Err(e) = steam::post_status_report(&db, &channel) {
            eprintln!("⚠️ Steam status report failed: {e}");
        }
    });

    text_response("Checking who's slacking on Steam...")
}

fn slack_ladder(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    if !token_matches(&params)? {
        return html_response(templates::pages::bad_token_page());
    }

    let channel = channel_name(&params);
    let db = db.clone();
    std::thread::spawn(move || {
        if let Err(e) = ladder::post_ladder_report(&db, &channel) {
            eprintln!("⚠️ Ladder report failed: {e}");
        }
    });

    text_response("Consulting the ladder...")
}

fn slack_lift(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    if !token_matches(&params)? {
        return html_response(templates::pages::bad_token_page());
    }

    let user_name = params
        .get("user_name")
        .ok_or_else(|| ServerError::BadRequest("user_name missing".into()))?;
    let text = params.get("text").map(String::as_str).unwrap_or("");

    let reply = lifting::run_command(db, user_name, text)?;
    text_response(reply)
}

fn slack_watch(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    if !token_matches(&params)? {
        return html_response(templates::pages::bad_token_page());
    }

    let user_name = params
        .get("user_name")
        .ok_or_else(|| ServerError::BadRequest("user_name missing".into()))?;
    let text = params.get("text").map(String::as_str).unwrap_or("");

    let reply = run_watch_command(db, user_name, text)?;
    text_response(reply)
}

/// Watch admin: `watches` lists, `unwatch <title>` removes, anything
/// else registers as `<title> | <field=value, ...> | <url-path>`.
fn run_watch_command(db: &Database, requester: &str, text: &str) -> Result<String, ServerError> {
    let trimmed = text.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("watches") {
        let watches = watch_store::list_watches(db)?;
        if watches.is_empty() {
            return Ok("No watches registered.".to_string());
        }
        let titles: Vec<&str> = watches.iter().map(|w| w.search_title.as_str()).collect();
        return Ok(format!("Watching: {}", titles.join(", ")));
    }

    if let Some(rest) = trimmed.strip_prefix("unwatch ") {
        let title = rest.trim();
        return if watch_store::delete_watch(db, title)? {
            Ok(format!("Stopped watching '{title}'."))
        } else {
            Ok(format!("Never heard of '{title}'."))
        };
    }

    let parts: Vec<&str> = trimmed.split('|').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ServerError::BadRequest(
            "usage: /watch <title> | <field=value, ...> | <url-path>".into(),
        ));
    }
    let (title, rules_text, search_url) = (parts[0], parts[1], parts[2]);
    if title.is_empty() {
        return Err(ServerError::BadRequest("watch needs a title".into()));
    }

    let mut rules = Vec::new();
    for rule in rules_text.split(',') {
        let rule = rule.trim();
        if rule.is_empty() {
            continue;
        }
        let (field, value) = rule.split_once('=').ok_or_else(|| {
            ServerError::BadRequest(format!("bad rule '{rule}', expected field=value"))
        })?;
        rules.push((field.trim().to_string(), value.trim().to_string()));
    }
    if rules.is_empty() {
        return Err(ServerError::BadRequest(
            "watch needs at least one rule".into(),
        ));
    }

    let watch = WatchQuery {
        search_title: title.to_string(),
        search_url: search_url.to_string(),
        requester: requester.to_string(),
        search_rules: rules,
        previous_results: Vec::new(),
    };

    if watch_store::insert_watch(db, &watch)? {
        Ok(format!("Watching '{title}' for {requester}."))
    } else {
        Ok(format!("'{title}' is already being watched."))
    }
}

/// Slash commands send the shared token with every request; anything
/// else gets the Bad Token page, not an error.
fn token_matches(params: &HashMap<String, String>) -> Result<bool, ServerError> {
    let expected = std::env::var("SLACK_COMMAND_TOKEN").map_err(|_| {
        ServerError::Config("SLACK_COMMAND_TOKEN environment variable not set".into())
    })?;
    Ok(params.get("token").map(|t| *t == expected).unwrap_or(false))
}

fn channel_name(params: &HashMap<String, String>) -> String {
    params
        .get("channel_name")
        .cloned()
        .unwrap_or_else(|| "general".to_string())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}
