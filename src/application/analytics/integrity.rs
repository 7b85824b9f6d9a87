//! Data-integrity screening ahead of chart and wait-time computation.

use tracing::warn;

use crate::domain::Entry;

/// Entries that passed the screen, plus how many were held back.
#[derive(Debug, Default)]
pub struct Screened<'a> {
    pub valid: Vec<&'a Entry>,
    pub flagged: usize,
}

/// Drop entries whose timestamps cannot be trusted.
///
/// Each rejected entry is logged at `warn` with its id and timestamps.
pub fn screen<'a, I>(entries: I) -> Screened<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut screened = Screened::default();
    for entry in entries {
        match entry.integrity_issue() {
            None => screened.valid.push(entry),
            Some(issue) => {
                warn!(
                    entry_id = %entry.id(),
                    created_at = %entry.created_at(),
                    updated_at = %entry.updated_at(),
                    reason = %issue,
                    "Excluding entry from charts"
                );
                screened.flagged += 1;
            }
        }
    }
    screened
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::domain::{CollectionId, EntryId, EntryStatus};

    #[test]
    fn flags_entries_updated_before_creation() {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let ok = Entry::from_parts(
            EntryId::new("ok"),
            CollectionId::new("wl"),
            created,
            created + Duration::hours(1),
            EntryStatus::Approved,
        );
        let bad = Entry::from_parts(
            EntryId::new("bad"),
            CollectionId::new("wl"),
            created,
            created - Duration::hours(1),
            EntryStatus::Pending,
        );
        let entries = vec![ok, bad];

        let screened = screen(&entries);

        assert_eq!(screened.flagged, 1);
        assert_eq!(screened.valid.len(), 1);
        assert_eq!(screened.valid[0].id().as_str(), "ok");
    }
}
