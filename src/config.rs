use clap::Parser;
use std::time::Duration;

/// Receipt processor: stores receipts and scores them with loyalty points.
#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-processor", author, version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "localhost:8080")]
    pub addr: String,

    /// Start in debug mode: exposes /debug routes and logs at debug level
    #[arg(long)]
    pub debug: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Seconds in-flight requests get to finish after a shutdown signal
    #[arg(long, default_value_t = 5)]
    pub shutdown_timeout: u64,
}

impl Config {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}
