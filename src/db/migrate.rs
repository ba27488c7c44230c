//! Idempotent schema migrations, run once at process start.

use rusqlite::{Connection, OptionalExtension, Result};

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `usuarios` table: one row per distinct login name.
fn create_usuarios_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL UNIQUE
        );
        "#,
    )?;
    Ok(())
}

/// Create the `fichajes` table: the append-only clock event log.
/// No uniqueness constraint; duplicate events per (usuario, fecha) are
/// tolerated and left to the aggregator.
fn create_fichajes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS fichajes (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            usuario TEXT NOT NULL,
            tipo    TEXT NOT NULL CHECK(tipo IN ('Entrada','Salida','Pausa','Fin pausa')),
            fecha   TEXT NOT NULL,
            hora    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let fresh = !table_exists(conn, "usuarios")? && !table_exists(conn, "fichajes")?;

    create_usuarios_table(conn)?;
    create_fichajes_table(conn)?;

    if fresh {
        tracing::info!("created schema (usuarios, fichajes)");
    }

    Ok(())
}
