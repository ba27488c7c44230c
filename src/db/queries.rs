use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Insert-if-absent. Logging in with a known name must not duplicate the row.
pub fn ensure_user(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO usuarios (nombre) VALUES (?1)",
        [name],
    )?;
    Ok(())
}

/// Append one immutable event row. There is no update or delete.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    conn.execute(
        "INSERT INTO fichajes (usuario, tipo, fecha, hora) VALUES (?1, ?2, ?3, ?4)",
        params![
            ev.user,
            ev.kind.to_db_str(),
            ev.date.format("%Y-%m-%d").to_string(),
            ev.time.format("%H:%M:%S").to_string(),
        ],
    )?;
    Ok(())
}

/// Full scan ordered by (fecha, hora), for the chronological table.
pub fn load_all_by_date(conn: &Connection) -> AppResult<Vec<Event>> {
    load_ordered(conn, "SELECT * FROM fichajes ORDER BY fecha, hora")
}

/// Full scan ordered by (usuario, fecha, hora), for the summary and export.
pub fn load_all_by_user(conn: &Connection) -> AppResult<Vec<Event>> {
    load_ordered(conn, "SELECT * FROM fichajes ORDER BY usuario, fecha, hora")
}

fn load_ordered(conn: &Connection, sql: &str) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("fecha")?;
    let time_str: String = row.get("hora")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("tipo")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        user: row.get("usuario")?,
        kind,
        date,
        time,
    })
}
