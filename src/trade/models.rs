use serde::{Deserialize, Serialize};

/// One normalized market listing as seen by a poll cycle. Serialized
/// as-is into the watch's `previous_json` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// Display price, e.g. "5 chaos" or "2 exalted".
    pub buyout: String,
    pub seller: String,
    /// Forum thread id, used to build the shop back-link.
    pub thread: String,
    /// Canonical price for comparison across cycles.
    pub price_in_chaos: f64,
    /// Prior buyout string, set only when a price decrease was detected
    /// on an already-known listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_drop: Option<String>,
}

impl Listing {
    /// Same listing across poll cycles: price fields are excluded, so a
    /// seller re-pricing the same item in the same thread still matches.
    pub fn same_listing(&self, other: &Listing) -> bool {
        self.name == other.name && self.seller == other.seller && self.thread == other.thread
    }
}

/// A named, persisted search being continuously polled.
#[derive(Debug, Clone)]
pub struct WatchQuery {
    /// Unique key; also the attachment title in notifications.
    pub search_title: String,
    /// Path fragment appended to the search site base URL for the
    /// back-link.
    pub search_url: String,
    pub requester: String,
    /// Ordered (field, value) filter pairs, arbitrary arity.
    pub search_rules: Vec<(String, String)>,
    /// Listings seen on the last cycle; empty until the watch has been
    /// through one.
    pub previous_results: Vec<Listing>,
}

/// Per-watch outcome of one poll cycle, input to the notifier.
#[derive(Debug)]
pub struct WatchOutcome {
    pub watch: WatchQuery,
    pub new_items: Vec<Listing>,
}
