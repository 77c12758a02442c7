//! CLI argument definitions for the Courtside application.
//!
//! Uses `clap` with derive macros. Priority resolution: CLI args > env vars
//! > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Courtside — a sports-lore conversation backend with streamed turns.
#[derive(Parser, Debug)]
#[command(name = "courtside", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Data directory for the SQLite conversation log.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > COURTSIDE_CONFIG env var >
    /// ~/.courtside/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref path) = self.config {
            return path.clone();
        }
        if let Ok(path) = std::env::var("COURTSIDE_CONFIG") {
            return PathBuf::from(path);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > COURTSIDE_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(port) = self.port {
            return port;
        }
        if let Ok(val) = std::env::var("COURTSIDE_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                return port;
            }
        }
        config_port
    }

    /// Resolve the data directory, if overridden on the command line.
    pub fn resolve_data_dir(&self) -> Option<String> {
        self.data_dir
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
    }
}

fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".courtside").join("config.toml")
}
