//! Configuration loading and resolution
//!
//! The server needs two settings: the path of the static statistics
//! database and the port to listen on. Both resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (COURTSIDE_DATABASE / COURTSIDE_PORT)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5780;

/// Default database location relative to the working directory.
pub const DEFAULT_DATABASE: &str = "data/stats.sqlite";

/// Values read from the optional config file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub port: Option<u16>,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database: PathBuf,
    pub port: u16,
}

/// Resolve the server configuration from all four tiers.
pub fn resolve(cli_database: Option<PathBuf>, cli_port: Option<u16>) -> ServerConfig {
    let file = load_file_config().unwrap_or_default();
    let env_database = std::env::var("COURTSIDE_DATABASE")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let env_port = std::env::var("COURTSIDE_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok());

    resolve_with(cli_database, cli_port, env_database, env_port, &file)
}

fn resolve_with(
    cli_database: Option<PathBuf>,
    cli_port: Option<u16>,
    env_database: Option<PathBuf>,
    env_port: Option<u16>,
    file: &FileConfig,
) -> ServerConfig {
    ServerConfig {
        database: cli_database
            .or(env_database)
            .or_else(|| file.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
        port: cli_port.or(env_port).or(file.port).unwrap_or(DEFAULT_PORT),
    }
}

/// Config file location: user config directory first, then the system path.
fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("courtside").join("config.toml")) {
        if path.exists() {
            return Some(path);
        }
    }
    let system = PathBuf::from("/etc/courtside/config.toml");
    if system.exists() {
        return Some(system);
    }
    None
}

/// Load the config file if one exists. A malformed file is logged and
/// treated as absent.
pub fn load_file_config() -> Option<FileConfig> {
    config_file_path().and_then(|path| load_file_config_from(&path))
}

fn load_file_config_from(path: &Path) -> Option<FileConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str::<FileConfig>(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Ignoring malformed config file {}: {}", path.display(), e);
            None
        }
    }
}
