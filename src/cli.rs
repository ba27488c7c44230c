use clap::Parser;

/// Command-line interface definition for fichaje
/// Web application to track clock in/out events with SQLite
#[derive(Parser)]
#[command(
    name = "fichaje",
    version = env!("CARGO_PKG_VERSION"),
    about = "A minimal employee time-clock web app: clock events, daily summaries and CSV export over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Override the bind address from the config file
    #[arg(long = "bind")]
    pub bind: Option<String>,

    /// Override the listening port from the config file
    #[arg(long = "port")]
    pub port: Option<u16>,
}
