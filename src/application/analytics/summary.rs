//! All-time status breakdowns and collection rankings.

use std::collections::HashMap;

use crate::domain::{Collection, CollectionId, CollectionRanking, CollectionSummary, Entry, EntryStatus};

/// Count entries by status and derive the approved share.
pub fn summarize_collection<'a, I>(entries: I) -> CollectionSummary
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut summary = CollectionSummary::default();
    for entry in entries {
        summary.total_signups += 1;
        match entry.status() {
            EntryStatus::Approved => summary.approved_count += 1,
            EntryStatus::Rejected => summary.rejected_count += 1,
            EntryStatus::Pending => summary.pending_count += 1,
        }
    }
    if summary.total_signups > 0 {
        summary.conversion_rate =
            summary.approved_count as f64 / summary.total_signups as f64 * 100.0;
    }
    summary
}

/// Rank `collections` by entry count, most signups first, keeping `limit`.
///
/// Ties keep collection id order. Entries of collections not listed are
/// ignored; collections without entries rank with a count of zero.
pub fn rank_collections(
    collections: &[Collection],
    entries: &[Entry],
    limit: usize,
) -> Vec<CollectionRanking> {
    let mut by_collection: HashMap<&CollectionId, Vec<&Entry>> = HashMap::new();
    for entry in entries {
        by_collection.entry(entry.collection_id()).or_default().push(entry);
    }

    let mut ranked: Vec<CollectionRanking> = collections
        .iter()
        .map(|collection| {
            let summary = summarize_collection(
                by_collection
                    .get(&collection.id)
                    .into_iter()
                    .flatten()
                    .copied(),
            );
            CollectionRanking {
                collection: collection.clone(),
                entry_count: summary.total_signups,
                conversion_rate: summary.conversion_rate,
            }
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.entry_count
            .cmp(&a.entry_count)
            .then_with(|| a.collection.id.cmp(&b.collection.id))
    });
    ranked.truncate(limit);
    ranked
}
