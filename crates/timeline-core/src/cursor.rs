// File: crates/timeline-core/src/cursor.rs
// Summary: Cursor snapping; closest at-or-before timestamp lookup.

/// Index of the latest timestamp <= `target` in a sorted axis.
///
/// Falls back to the first entry when `target` precedes the whole axis, so a
/// hovering cursor always lands on a real data point. `None` only for an
/// empty slice. O(log n): this runs on every pointer move.
pub fn previous_index(timestamps: &[i64], target: i64) -> Option<usize> {
    if timestamps.is_empty() {
        return None;
    }
    let after = timestamps.partition_point(|&t| t <= target);
    Some(after.saturating_sub(1))
}

/// The latest timestamp <= `target`, or the first timestamp when `target`
/// precedes the whole axis.
pub fn previous_timestamp(timestamps: &[i64], target: i64) -> Option<i64> {
    previous_index(timestamps, target).map(|i| timestamps[i])
}
