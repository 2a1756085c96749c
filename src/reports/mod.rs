//! The four statistics reports.
//!
//! Each report is a stateless compute function over a borrowed
//! [`RecordSet`](crate::record::RecordSet), returning `None` when the set is
//! empty so rendering can degrade to a "no data" message instead of taking
//! the mode of an empty collection.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value in `items`; ties break to the value encountered
/// first. The first-occurrence index is tracked explicitly so the result
/// never depends on hash iteration order.
pub(crate) fn mode<K: Eq + Hash>(items: impl Iterator<Item = K>) -> Option<K> {
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (i, item) in items.enumerate() {
        counts.entry(item).or_insert((0, i)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// Frequency of each distinct value, most frequent first; ties keep the
/// order values were first encountered in.
pub(crate) fn value_counts<K: Eq + Hash>(items: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (i, item) in items.enumerate() {
        counts.entry(item).or_insert((0, i)).0 += 1;
    }
    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    entries
        .into_iter()
        .map(|(value, (count, _))| (value, count))
        .collect()
}
