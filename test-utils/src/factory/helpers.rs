//! Shared helper utilities for factory methods.

use chrono::{DateTime, TimeZone, Utc};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed reference instant used as "now" by tests: 2026-03-15 12:00:00 UTC.
///
/// Tests pass this explicitly to the resolver instead of reading the clock so
/// validity windows can be placed relative to it.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}
