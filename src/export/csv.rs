use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use csv::Writer;

/// Filename the browser receives for the attachment.
pub const EXPORT_FILENAME: &str = "fichajes.csv";

/// Serialize the raw event log to CSV in memory, one row per event,
/// header exactly `Usuario,Tipo,Fecha,Hora`.
pub fn events_to_csv(events: &[Event]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(["Usuario", "Tipo", "Fecha", "Hora"])?;

    for ev in events {
        wtr.write_record(&[
            ev.user.clone(),
            ev.kind.to_db_str().to_string(),
            ev.date_str(),
            ev.time_str(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}
