use super::event_type::EventType;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub user: String,       // ⇔ fichajes.usuario (TEXT, references usuarios.nombre)
    pub kind: EventType,    // ⇔ fichajes.tipo ('Entrada'|'Salida'|'Pausa'|'Fin pausa')
    pub date: NaiveDate,    // ⇔ fichajes.fecha (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,    // ⇔ fichajes.hora (TEXT "HH:MM:SS")
}

impl Event {
    /// Constructor for events created by the clock form. The id is assigned
    /// by SQLite on insert; 0 is a placeholder.
    pub fn new(user: impl Into<String>, kind: EventType, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: 0,
            user: user.into(),
            kind,
            date,
            time,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
