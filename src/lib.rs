//! fichaje library root.
//! Exposes the CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::Cli;
use config::Config;
use db::initialize::init_db;
use db::pool::DbPool;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Entry point used by main.rs: load config, open the database, run the
/// idempotent migrations and serve the router.
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(std::path::Path::new(path)),
        None => Config::load(),
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(bind) = &cli.bind {
        cfg.bind_address = bind.clone();
    }
    if let Some(port) = cli.port {
        cfg.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Some(parent) = std::path::Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let state = web::AppState::new(pool, cfg.secret_key.clone());
    let app = web::router(state);

    let addr = format!("{}:{}", cfg.bind_address, cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(database = %cfg.database, "listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
