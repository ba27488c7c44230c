//! The summary aggregator: turns the raw clock event log into per-user,
//! per-day worked/pause durations.
//!
//! Pure function of the event list: no persistence, no errors. Malformed
//! sequences (unmatched pauses, days without Entry or Exit) degrade to
//! zeroed durations; the `complete` flag on DaySummary is the only signal.

use crate::models::day_summary::{DaySummary, UserSummary};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::utils::time::seconds_between;
use chrono::{NaiveDate, NaiveTime};

/// One day's raw buckets before duration math. Entry/Exit are last-write-wins
/// when a user logs duplicates; pauses keep event order.
#[derive(Debug, Default)]
struct DayBuckets {
    entry: Option<NaiveTime>,
    exit: Option<NaiveTime>,
    pauses: Vec<(EventType, NaiveTime)>,
}

/// Aggregate the full event log, grouped by user then date.
/// Users and dates keep first-seen order, so callers that load the log
/// ordered by (usuario, fecha, hora) get sorted output for free.
pub fn summarize(events: &[Event]) -> Vec<UserSummary> {
    let mut grouped: Vec<(String, Vec<(NaiveDate, DayBuckets)>)> = Vec::new();

    for ev in events {
        let ui = match grouped.iter().position(|(user, _)| *user == ev.user) {
            Some(i) => i,
            None => {
                grouped.push((ev.user.clone(), Vec::new()));
                grouped.len() - 1
            }
        };
        let days = &mut grouped[ui].1;

        let di = match days.iter().position(|(date, _)| *date == ev.date) {
            Some(i) => i,
            None => {
                days.push((ev.date, DayBuckets::default()));
                days.len() - 1
            }
        };
        let buckets = &mut days[di].1;

        match ev.kind {
            EventType::Entry => buckets.entry = Some(ev.time),
            EventType::Exit => buckets.exit = Some(ev.time),
            EventType::PauseStart | EventType::PauseEnd => {
                buckets.pauses.push((ev.kind, ev.time));
            }
        }
    }

    grouped
        .into_iter()
        .map(|(user, days)| UserSummary {
            days: days
                .into_iter()
                .map(|(date, buckets)| summarize_day(&user, date, &buckets))
                .collect(),
            user,
        })
        .collect()
}

fn summarize_day(user: &str, date: NaiveDate, buckets: &DayBuckets) -> DaySummary {
    let mut worked_secs = 0;
    let mut pause_secs = 0;
    let complete = buckets.entry.is_some() && buckets.exit.is_some();

    if let (Some(entry), Some(exit)) = (buckets.entry, buckets.exit) {
        let total_secs = seconds_between(entry, exit);
        pause_secs = matched_pause_seconds(&buckets.pauses);
        worked_secs = total_secs - pause_secs;
    }

    DaySummary {
        user: user.to_string(),
        date,
        entry: buckets.entry,
        exit: buckets.exit,
        worked_hours: worked_secs as f64 / 3600.0,
        pause_hours: pause_secs as f64 / 3600.0,
        complete,
    }
}

/// Left-to-right scan with two-element lookahead: an adjacent
/// (Pausa, Fin pausa) pair counts, anything unmatched is skipped.
fn matched_pause_seconds(pauses: &[(EventType, NaiveTime)]) -> i64 {
    let mut total = 0;
    let mut i = 0;

    while i + 1 < pauses.len() {
        if pauses[i].0 == EventType::PauseStart && pauses[i + 1].0 == EventType::PauseEnd {
            total += seconds_between(pauses[i].1, pauses[i + 1].1);
            i += 2;
        } else {
            i += 1;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(user: &str, kind: EventType, date: &str, time: &str) -> Event {
        Event::new(
            user,
            kind,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
        )
    }

    #[test]
    fn well_formed_day_with_one_pause() {
        // Scenario from the acceptance checklist: 09:00-17:00 with a
        // half-hour break at noon.
        let events = vec![
            ev("alice", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("alice", EventType::PauseStart, "2024-01-01", "12:00:00"),
            ev("alice", EventType::PauseEnd, "2024-01-01", "12:30:00"),
            ev("alice", EventType::Exit, "2024-01-01", "17:00:00"),
        ];

        let out = summarize(&events);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].user, "alice");

        let day = &out[0].days[0];
        assert_eq!(day.entry.unwrap().format("%H:%M:%S").to_string(), "09:00:00");
        assert_eq!(day.exit.unwrap().format("%H:%M:%S").to_string(), "17:00:00");
        assert_eq!(day.worked_hours, 7.5);
        assert_eq!(day.pause_hours, 0.5);
        assert!(day.complete);
    }

    #[test]
    fn worked_plus_pause_equals_span() {
        let events = vec![
            ev("bob", EventType::Entry, "2024-03-05", "08:17:00"),
            ev("bob", EventType::PauseStart, "2024-03-05", "10:02:00"),
            ev("bob", EventType::PauseEnd, "2024-03-05", "10:19:00"),
            ev("bob", EventType::PauseStart, "2024-03-05", "13:00:00"),
            ev("bob", EventType::PauseEnd, "2024-03-05", "13:41:00"),
            ev("bob", EventType::Exit, "2024-03-05", "16:44:00"),
        ];

        let day = &summarize(&events)[0].days[0];
        let span_hours = (16.0 * 3600.0 + 44.0 * 60.0 - (8.0 * 3600.0 + 17.0 * 60.0)) / 3600.0;
        assert!((day.worked_hours + day.pause_hours - span_hours).abs() < 1e-9);
    }

    #[test]
    fn entry_only_day_is_incomplete_and_zeroed() {
        let events = vec![ev("alice", EventType::Entry, "2024-01-01", "09:00:00")];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.worked_hours, 0.0);
        assert_eq!(day.pause_hours, 0.0);
        assert!(!day.complete);
        assert!(day.exit.is_none());
    }

    #[test]
    fn exit_only_day_is_incomplete() {
        let events = vec![ev("alice", EventType::Exit, "2024-01-01", "17:00:00")];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.worked_hours, 0.0);
        assert!(!day.complete);
    }

    #[test]
    fn unmatched_pause_contributes_nothing() {
        let events = vec![
            ev("alice", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("alice", EventType::PauseStart, "2024-01-01", "12:00:00"),
            ev("alice", EventType::Exit, "2024-01-01", "17:00:00"),
        ];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.pause_hours, 0.0);
        assert_eq!(day.worked_hours, 8.0);
    }

    #[test]
    fn double_pause_start_skips_the_first() {
        // Pausa, Pausa, Fin pausa: the scan skips the first unmatched start
        // and pairs the second with the end.
        let events = vec![
            ev("alice", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("alice", EventType::PauseStart, "2024-01-01", "11:00:00"),
            ev("alice", EventType::PauseStart, "2024-01-01", "12:00:00"),
            ev("alice", EventType::PauseEnd, "2024-01-01", "12:30:00"),
            ev("alice", EventType::Exit, "2024-01-01", "17:00:00"),
        ];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.pause_hours, 0.5);
    }

    #[test]
    fn pause_end_before_start_is_skipped() {
        let events = vec![
            ev("alice", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("alice", EventType::PauseEnd, "2024-01-01", "10:00:00"),
            ev("alice", EventType::PauseStart, "2024-01-01", "12:00:00"),
            ev("alice", EventType::PauseEnd, "2024-01-01", "12:15:00"),
            ev("alice", EventType::Exit, "2024-01-01", "17:00:00"),
        ];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.pause_hours, 0.25);
    }

    #[test]
    fn duplicate_entry_is_last_write_wins() {
        let events = vec![
            ev("alice", EventType::Entry, "2024-01-01", "08:00:00"),
            ev("alice", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("alice", EventType::Exit, "2024-01-01", "17:00:00"),
        ];

        let day = &summarize(&events)[0].days[0];
        assert_eq!(day.entry.unwrap().format("%H:%M:%S").to_string(), "09:00:00");
        assert_eq!(day.worked_hours, 8.0);
    }

    #[test]
    fn groups_by_user_and_date_in_first_seen_order() {
        let events = vec![
            ev("ana", EventType::Entry, "2024-01-01", "09:00:00"),
            ev("ana", EventType::Exit, "2024-01-01", "17:00:00"),
            ev("ana", EventType::Entry, "2024-01-02", "09:00:00"),
            ev("zoe", EventType::Entry, "2024-01-01", "10:00:00"),
            ev("zoe", EventType::Exit, "2024-01-01", "18:00:00"),
        ];

        let out = summarize(&events);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].user, "ana");
        assert_eq!(out[0].days.len(), 2);
        assert_eq!(out[1].user, "zoe");
        assert_eq!(out[1].days[0].worked_hours, 8.0);
    }

    #[test]
    fn empty_log_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }
}
