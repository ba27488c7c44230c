//! Time utilities: wall-clock duration computations.

use chrono::NaiveTime;

/// Same-day wall-clock difference. Negative when `end` precedes `start`;
/// midnight crossings are not handled.
pub fn seconds_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_seconds()
}
