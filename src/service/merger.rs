//! Chronological merge of a job's timeline entries.
//!
//! Entries that already happened are placed by wall-clock time, everything else keeps the order in
//! which the builder generated it. A single global sort is not possible: most entries have no
//! timestamp yet, and fueling stops are logged outside the milestone sequence.

use std::cmp::Ordering;

use crate::model::TimelineEntry;

/// Splits entries into `(resolved, unresolved)`, keeping the relative order of both halves.
pub fn partition(entries: Vec<TimelineEntry>) -> (Vec<TimelineEntry>, Vec<TimelineEntry>) {
    entries.into_iter().partition(TimelineEntry::is_resolved)
}

/// Sorts resolved entries by timestamp, ties broken by generation sequence.
pub fn sort_resolved(entries: &mut [TimelineEntry]) {
    entries.sort_by(chronological);
}

pub fn merge_chronologically(entries: Vec<TimelineEntry>) -> Vec<TimelineEntry> {
    let (mut resolved, mut unresolved) = partition(entries);

    sort_resolved(&mut resolved);
    unresolved.sort_by_key(|entry| entry.sequence);

    tracing::trace!(
        resolved = resolved.len(),
        unresolved = unresolved.len(),
        "merged timeline entries"
    );

    resolved.extend(unresolved);
    resolved
}

fn chronological(a: &TimelineEntry, b: &TimelineEntry) -> Ordering {
    a.timestamp
        .cmp(&b.timestamp)
        .then_with(|| a.sequence.cmp(&b.sequence))
}
