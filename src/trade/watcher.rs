use crate::db::{watches as watch_store, Database};
use crate::slack;
use crate::trade::fetch::TradeSearcher;
use crate::trade::flavor::{flavor_message, FlavorState};
use crate::trade::models::WatchOutcome;
use crate::trade::notify::compose_attachments;
use crate::trade::query::build_search_document;
use crate::trade::reconcile::reconcile;
use chrono::{Local, Timelike};
use std::thread;
use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Starts the poll loop on its own thread. A single thread runs every
/// cycle to completion before sleeping, so cycles never overlap and
/// the flavor state needs no locking.
pub fn spawn(db: Database) {
    thread::spawn(move || {
        eprintln!("🧵 Trade watcher thread started");

        let searcher = match TradeSearcher::new() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ Trade watcher init failed: {e}");
                return;
            }
        };

        let mut flavor = FlavorState::new();
        loop {
            run_cycle(&db, &searcher, &mut flavor);
            thread::sleep(POLL_INTERVAL);
        }
    });
}

/// One full cycle: load watches, fetch every query, reconcile, persist,
/// then either post the aggregate notification or give Hargan the
/// floor.
pub fn run_cycle(db: &Database, searcher: &TradeSearcher, flavor: &mut FlavorState) {
    let watches = match watch_store::list_watches(db) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("⚠️ Could not load watches: {e}");
            return;
        }
    };

    // Fan out one fetch per watch; everything joins before any
    // reconciliation because the notification aggregates all queries.
    let fresh_sets = thread::scope(|s| {
        let handles: Vec<_> = watches
            .iter()
            .map(|w| {
                let document = build_search_document(&w.search_rules);
                let title = w.search_title.clone();
                s.spawn(move || searcher.fetch_listings(&title, &document))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect::<Vec<_>>()
    });

    let mut outcomes = Vec::with_capacity(watches.len());
    for (mut watch, fresh) in watches.into_iter().zip(fresh_sets) {
        let result = reconcile(fresh, &watch.previous_results);

        // Written every cycle even when nothing changed; a failed write
        // just means the next cycle diffs against stale state.
        if let Err(e) =
            watch_store::save_previous_results(db, &watch.search_title, &result.previous_results)
        {
            eprintln!(
                "⚠️ Could not persist results for '{}': {e}",
                watch.search_title
            );
        }

        watch.previous_results = result.previous_results;
        outcomes.push(WatchOutcome {
            watch,
            new_items: result.new_items,
        });
    }

    let attachments = compose_attachments(&outcomes);
    if !attachments.is_empty() {
        let message = slack::Message::with_attachments(attachments);
        if let Err(e) = slack::post_webhook(&message) {
            eprintln!("⚠️ Trade notification failed: {e}");
        }
    } else if let Some(line) = flavor.tick(Local::now().hour(), &mut rand::thread_rng()) {
        if let Err(e) = slack::post_webhook(&flavor_message(line)) {
            eprintln!("⚠️ Hargan got cut off: {e}");
        }
    }
}
