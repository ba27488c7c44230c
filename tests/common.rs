#![allow(dead_code)]
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use fichaje::db::initialize::init_db;
use fichaje::db::pool::DbPool;
use fichaje::web::{AppState, router, session};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const SECRET: &str = "secreto_de_prueba";

/// Build a router over a fresh SQLite file in a temp dir. The TempDir must
/// stay alive for the duration of the test.
pub fn test_app() -> (Router, PathBuf, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("fichajes.sqlite");

    let pool = DbPool::new(db_path.to_str().unwrap()).expect("open db");
    init_db(&pool.conn).expect("init db");

    let state = AppState::new(pool, SECRET.to_string());
    (router(state), db_path, dir)
}

/// A valid session cookie header value for the given user.
pub fn cookie_for(name: &str) -> String {
    format!("{}={}", session::SESSION_COOKIE, session::seal(SECRET, name))
}

pub async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<axum::body::Body> {
    let mut req = Request::builder().uri(path).method("GET");
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    app.clone()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(
    app: &Router,
    path: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<axum::body::Body> {
    let mut req = Request::builder()
        .uri(path)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    app.clone()
        .oneshot(req.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Open a second connection to the test DB for direct assertions and seeding.
pub fn open_db(db_path: &PathBuf) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

/// Seed one event row directly, bypassing the clock form (which always uses
/// the current wall-clock time).
pub fn seed_event(conn: &rusqlite::Connection, user: &str, tipo: &str, fecha: &str, hora: &str) {
    conn.execute(
        "INSERT INTO fichajes (usuario, tipo, fecha, hora) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![user, tipo, fecha, hora],
    )
    .expect("seed event");
}
