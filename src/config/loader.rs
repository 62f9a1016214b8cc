//! Load `AppConfig` from the process environment, with an optional `.env` file layered underneath.

use crate::config::types::{AppConfig, DEFAULT_PORT};
use crate::error::ConfigError;

pub const PORT_KEY: &str = "PORT";
pub const DB_CONN_KEY: &str = "DB_CONN";

/// Read `.env` from the working directory when present, then build the config from the environment.
/// Variables already set in the environment win over `.env` entries.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(ConfigError::Load(e.to_string())),
    }
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the config from any key lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let port = match get(PORT_KEY) {
        Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            key: PORT_KEY,
            value: raw,
        })?,
        None => DEFAULT_PORT,
    };
    let db_conn = get(DB_CONN_KEY).ok_or(ConfigError::Missing(DB_CONN_KEY))?;

    Ok(AppConfig { port, db_conn })
}
