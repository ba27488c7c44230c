use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Derived aggregate of one user's events for one calendar date.
/// Never persisted; recomputed from the full event log on every request.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub user: String,
    pub date: NaiveDate,
    pub entry: Option<NaiveTime>,
    pub exit: Option<NaiveTime>,
    /// Fractional hours. Zero whenever the day is incomplete.
    pub worked_hours: f64,
    /// Fractional hours spent in matched Pausa / Fin pausa pairs.
    pub pause_hours: f64,
    /// False when the day is missing its Entry or Exit. Durations are then
    /// zeroed rather than guessed.
    pub complete: bool,
}

/// All summaries for one user, days in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user: String,
    pub days: Vec<DaySummary>,
}
