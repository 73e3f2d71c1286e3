//! Comparison-based ranking scores
//!
//! Each submitted pairwise comparison nudges the ranking scores of both
//! watched entries: the preferred item gains [`WIN_POINTS`], the other loses
//! [`LOSS_POINTS`]. Scores order a user's watched history from most to least
//! enjoyed; ties fall back to watch recency.

use crate::catalog::types::{ComparisonOutcome, Preferred, WatchedEntry};

/// Points awarded to the preferred item of a comparison
pub const WIN_POINTS: f64 = 10.0;
/// Points deducted from the non-preferred item
pub const LOSS_POINTS: f64 = 5.0;

/// Score deltas for (new item, existing item) given the round's winner
pub fn deltas(preferred: Preferred) -> (f64, f64) {
    match preferred {
        Preferred::New => (WIN_POINTS, -LOSS_POINTS),
        Preferred::Existing => (-LOSS_POINTS, WIN_POINTS),
    }
}

/// Apply one comparison outcome to the two affected watched entries.
///
/// Either entry may be absent (e.g. the candidate was removed from the
/// watched history between fetch and submission); missing entries are
/// skipped rather than resurrected.
pub fn apply_outcome(
    outcome: &ComparisonOutcome,
    new_entry: Option<&mut WatchedEntry>,
    existing_entry: Option<&mut WatchedEntry>,
) {
    let (new_delta, existing_delta) = deltas(outcome.preferred);

    if let Some(entry) = new_entry {
        entry.ranking_score += new_delta;
    }
    if let Some(entry) = existing_entry {
        entry.ranking_score += existing_delta;
    }
}

/// Sort watched entries by ranking score descending, then recency
pub fn rank(entries: &mut [WatchedEntry]) {
    entries.sort_by(|a, b| {
        b.ranking_score
            .partial_cmp(&a.ranking_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.watched_at.cmp(&a.watched_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(preferred: Preferred) -> ComparisonOutcome {
        ComparisonOutcome {
            new_content_id: 1,
            existing_content_id: 2,
            preferred,
        }
    }

    #[test]
    fn test_preferring_new_moves_both_scores() {
        let mut new_entry = WatchedEntry::new(1);
        let mut existing_entry = WatchedEntry::new(2);

        apply_outcome(
            &outcome(Preferred::New),
            Some(&mut new_entry),
            Some(&mut existing_entry),
        );

        assert_eq!(new_entry.ranking_score, WIN_POINTS);
        assert_eq!(existing_entry.ranking_score, -LOSS_POINTS);
    }

    #[test]
    fn test_preferring_existing_moves_both_scores() {
        let mut new_entry = WatchedEntry::new(1);
        let mut existing_entry = WatchedEntry::new(2);

        apply_outcome(
            &outcome(Preferred::Existing),
            Some(&mut new_entry),
            Some(&mut existing_entry),
        );

        assert_eq!(new_entry.ranking_score, -LOSS_POINTS);
        assert_eq!(existing_entry.ranking_score, WIN_POINTS);
    }

    #[test]
    fn test_missing_entries_are_skipped() {
        let mut existing_entry = WatchedEntry::new(2);
        apply_outcome(&outcome(Preferred::New), None, Some(&mut existing_entry));
        assert_eq!(existing_entry.ranking_score, -LOSS_POINTS);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let mut entries = vec![
            WatchedEntry {
                content_id: 1,
                watched_at: 100,
                ranking_score: -5.0,
            },
            WatchedEntry {
                content_id: 2,
                watched_at: 200,
                ranking_score: 20.0,
            },
            WatchedEntry {
                content_id: 3,
                watched_at: 300,
                ranking_score: 10.0,
            },
        ];

        rank(&mut entries);

        let order: Vec<_> = entries.iter().map(|e| e.content_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
