use crate::slack::{Attachment, Field};
use crate::trade::models::{Listing, WatchOutcome};
use url::Url;

/// Search site the watch's `search_url` fragment links back into.
pub const SEARCH_BASE_URL: &str = "http://poe.trade/";

const THREAD_BASE_URL: &str = "https://www.pathofexile.com/forum/view-thread/";

/// One attachment per watch that turned up something new this cycle.
/// Watches with nothing new contribute nothing; an empty return means
/// the whole cycle stays silent (and Hargan gets his chance).
pub fn compose_attachments(outcomes: &[WatchOutcome]) -> Vec<Attachment> {
    outcomes
        .iter()
        .filter(|o| !o.new_items.is_empty())
        .map(|o| Attachment {
            title: Some(o.watch.search_title.clone()),
            title_link: search_link(&o.watch.search_url),
            fields: o.new_items.iter().map(listing_field).collect(),
            ..Attachment::new(format!(
                "{} new listing(s) for {}",
                o.new_items.len(),
                o.watch.search_title
            ))
        })
        .collect()
}

fn search_link(search_url: &str) -> Option<String> {
    Url::parse(SEARCH_BASE_URL)
        .ok()?
        .join(search_url)
        .ok()
        .map(|u| u.to_string())
}

fn listing_field(item: &Listing) -> Field {
    let mut price_line = format!("Price: {}", item.buyout);
    if let Some(prior) = &item.price_drop {
        price_line.push_str(&format!(" (Down from {prior})"));
    }

    let value = format!(
        "{price_line}\nFrom {} in thread <{}{}|{}>",
        item.seller, THREAD_BASE_URL, item.thread, item.thread
    );

    Field {
        title: item.name.clone(),
        value,
        short: false,
    }
}
