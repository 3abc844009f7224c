use clap::Parser;
use std::path::PathBuf;

/// Server configuration, parsed once at startup and immutable afterwards.
///
/// Shared with every connection handler behind an `Arc`; nothing mutates it
/// after `load`, so no locking is needed.
#[derive(Debug, Clone, Parser)]
#[command(name = "picohttp")]
#[command(about = "Minimal one-request-per-connection HTTP/1.1 server")]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 4221, env = "PICOHTTP_PORT")]
    pub port: u16,

    /// Host/IP to bind
    #[arg(long, default_value = "0.0.0.0", env = "PICOHTTP_HOST")]
    pub host: String,

    /// Root directory for /files/ requests; without it they answer 404
    #[arg(long)]
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }

    /// Full bind address (host:port).
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
