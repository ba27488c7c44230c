pub mod day_summary;
pub mod event;
pub mod event_type;
