//! HTTP surface: router, shared state, session cookie, handlers, views.

pub mod handlers;
pub mod session;
pub mod views;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::get;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<DbPool>>,
    pub secret: Arc<String>,
}

impl AppState {
    pub fn new(pool: DbPool, secret: String) -> Self {
        Self {
            db: Arc::new(Mutex::new(pool)),
            secret: Arc::new(secret),
        }
    }

    /// Lock the single connection. Writers serialize here.
    pub fn db(&self) -> AppResult<MutexGuard<'_, DbPool>> {
        self.db
            .lock()
            .map_err(|_| AppError::Other("database lock poisoned".to_string()))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::login_form).post(handlers::login_submit))
        .route(
            "/fichar",
            get(handlers::clock_form).post(handlers::clock_submit),
        )
        .route("/tabla", get(handlers::events_table))
        .route("/resumen", get(handlers::summary))
        .route("/exportar", get(handlers::export_csv))
        .route("/logout", get(handlers::logout))
        .with_state(state)
}
