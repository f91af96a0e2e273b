//! Low-value bucketing of finalized window rows.
//!
//! Tasks that accumulated less than [`MIN_REPORTABLE_WORKDAYS`] over the
//! window are noise in the final report. They are relabeled with the
//! catch-all task name and merged per project; a merged bucket that still
//! does not clear the threshold is dropped entirely. Dropping sub-threshold
//! noise is intended behavior, not data loss to be worked around.

use crate::libs::window::WindowRow;
use std::collections::BTreeMap;

/// Minimum workdays fraction a row must reach to be reported on its own.
pub const MIN_REPORTABLE_WORKDAYS: f64 = 0.2;

/// Task label given to merged low-value rows.
pub const CATCH_ALL_TASK: &str = "Other";

/// Partitions rows at the threshold, merges the sub-threshold ones into
/// one catch-all row per project, and keeps a merged row only if its sum
/// clears the threshold too.
///
/// Output order is deterministic: kept rows in their incoming order,
/// followed by bucket rows in project name order.
pub fn bucket_low_value(rows: Vec<WindowRow>) -> Vec<WindowRow> {
    let (mut kept, low): (Vec<_>, Vec<_>) = rows.into_iter().partition(|row| row.workdays >= MIN_REPORTABLE_WORKDAYS);

    let mut buckets: BTreeMap<String, WindowRow> = BTreeMap::new();
    for mut row in low {
        row.task = CATCH_ALL_TASK.to_string();
        match buckets.get_mut(&row.project) {
            Some(bucket) => {
                bucket.workdays += row.workdays;
                // Merged buckets carry the latest touched date.
                if day_of(&row.date) > day_of(&bucket.date) {
                    bucket.date = row.date;
                }
            }
            None => {
                buckets.insert(row.project.clone(), row);
            }
        }
    }

    kept.extend(buckets.into_values().filter(|bucket| bucket.workdays >= MIN_REPORTABLE_WORKDAYS));
    kept
}

/// Day-of-month prefix of a `DD.<suffix>` date string.
fn day_of(date: &str) -> u32 {
    date.split('.').next().and_then(|day| day.parse().ok()).unwrap_or(0)
}
