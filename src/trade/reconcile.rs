use crate::trade::models::Listing;

/// Outcome of diffing one cycle's fresh fetch against the stored set.
#[derive(Debug)]
pub struct Reconciliation {
    /// What to persist as the watch's known listings.
    pub previous_results: Vec<Listing>,
    /// Listings never seen before, in fetch order.
    pub new_items: Vec<Listing>,
}

/// Diffs freshly fetched listings against what the last cycle stored.
///
/// First observation of a watch seeds the store and reports everything
/// as new, so the cycle right after registering floods the channel
/// once. After that:
///
/// - a fresh listing matching a stored one at the same or higher price
///   keeps the stored copy and stays quiet;
/// - a fresh listing matching a stored one at a strictly lower price
///   replaces it, tagged with the old buyout, and stays quiet;
/// - an unmatched fresh listing is kept and reported as new;
/// - stored listings absent from the fetch are dropped without a word.
///   This also means a failed fetch (empty fresh set) forgets the
///   watch's whole history and the next good fetch re-reports it all.
///
/// Output order follows the fetch. Never fails.
pub fn reconcile(fresh: Vec<Listing>, previous: &[Listing]) -> Reconciliation {
    if previous.is_empty() {
        return Reconciliation {
            previous_results: fresh.clone(),
            new_items: fresh,
        };
    }

    let mut previous_results = Vec::with_capacity(fresh.len());
    let mut new_items = Vec::new();

    for mut listing in fresh {
        match previous.iter().find(|p| p.same_listing(&listing)) {
            Some(prior) if prior.price_in_chaos <= listing.price_in_chaos => {
                previous_results.push(prior.clone());
            }
            Some(prior) => {
                listing.price_drop = Some(prior.buyout.clone());
                previous_results.push(listing);
            }
            None => {
                previous_results.push(listing.clone());
                new_items.push(listing);
            }
        }
    }

    Reconciliation {
        previous_results,
        new_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, seller: &str, thread: &str, buyout: &str, chaos: f64) -> Listing {
        Listing {
            name: name.to_string(),
            buyout: buyout.to_string(),
            seller: seller.to_string(),
            thread: thread.to_string(),
            price_in_chaos: chaos,
            price_drop: None,
        }
    }

    #[test]
    fn first_observation_seeds_and_reports_everything() {
        let fresh = vec![
            listing("Foo", "A", "1", "5 chaos", 5.0),
            listing("Bar", "B", "2", "1 exalted", 70.0),
        ];

        let out = reconcile(fresh.clone(), &[]);
        assert_eq!(out.previous_results, fresh);
        assert_eq!(out.new_items, fresh);
    }

    #[test]
    fn known_listing_at_same_price_is_kept_quietly() {
        let prior = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];
        let fresh = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];

        let out = reconcile(fresh, &prior);
        assert_eq!(out.previous_results, prior);
        assert!(out.new_items.is_empty());
    }

    #[test]
    fn price_increase_keeps_the_stored_copy() {
        let prior = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];
        let fresh = vec![listing("Foo", "A", "1", "9 chaos", 9.0)];

        let out = reconcile(fresh, &prior);
        // the old, cheaper record survives
        assert_eq!(out.previous_results, prior);
        assert!(out.new_items.is_empty());
    }

    #[test]
    fn price_drop_is_tracked_but_not_reported_as_new() {
        let prior = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];
        let fresh = vec![listing("Foo", "A", "1", "3 chaos", 3.0)];

        let out = reconcile(fresh, &prior);
        assert!(out.new_items.is_empty());

        let kept = &out.previous_results[0];
        assert_eq!(kept.price_in_chaos, 3.0);
        assert_eq!(kept.buyout, "3 chaos");
        assert_eq!(kept.price_drop.as_deref(), Some("5 chaos"));
    }

    #[test]
    fn unmatched_fresh_listing_is_kept_and_reported() {
        let prior = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];
        let fresh = vec![
            listing("Foo", "A", "1", "5 chaos", 5.0),
            listing("Baz", "C", "3", "2 chaos", 2.0),
        ];

        let out = reconcile(fresh, &prior);
        assert_eq!(out.previous_results.len(), 2);
        assert_eq!(out.new_items, vec![listing("Baz", "C", "3", "2 chaos", 2.0)]);
    }

    #[test]
    fn delisted_entries_vanish_silently() {
        let prior = vec![
            listing("Foo", "A", "1", "5 chaos", 5.0),
            listing("Gone", "D", "4", "8 chaos", 8.0),
        ];
        let fresh = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];

        let out = reconcile(fresh, &prior);
        assert_eq!(out.previous_results, vec![listing("Foo", "A", "1", "5 chaos", 5.0)]);
        assert!(out.new_items.is_empty());
    }

    #[test]
    fn reconciling_twice_with_identical_fetches_goes_quiet() {
        let fresh = vec![
            listing("Foo", "A", "1", "5 chaos", 5.0),
            listing("Bar", "B", "2", "1 exalted", 70.0),
        ];

        let first = reconcile(fresh.clone(), &[]);
        assert_eq!(first.new_items.len(), 2);

        let second = reconcile(fresh.clone(), &first.previous_results);
        assert!(second.new_items.is_empty());
        assert_eq!(second.previous_results, fresh);
    }

    #[test]
    fn output_preserves_fetch_order() {
        let prior = vec![listing("Mid", "M", "9", "4 chaos", 4.0)];
        let fresh = vec![
            listing("First", "X", "10", "1 chaos", 1.0),
            listing("Mid", "M", "9", "4 chaos", 4.0),
            listing("Last", "Z", "11", "6 chaos", 6.0),
        ];

        let out = reconcile(fresh, &prior);
        let names: Vec<&str> = out
            .previous_results
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Mid", "Last"]);

        let new_names: Vec<&str> = out.new_items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(new_names, vec!["First", "Last"]);
    }

    #[test]
    fn same_listing_repriced_in_a_new_thread_counts_as_new() {
        let prior = vec![listing("Foo", "A", "1", "5 chaos", 5.0)];
        let fresh = vec![listing("Foo", "A", "2", "3 chaos", 3.0)];

        let out = reconcile(fresh.clone(), &prior);
        assert_eq!(out.new_items, fresh);
        assert!(out.previous_results[0].price_drop.is_none());
    }
}
