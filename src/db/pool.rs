//! SQLite connection wrapper (lightweight, one connection per process).
//! Concurrent handlers serialize on the mutex the web state wraps around it.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
