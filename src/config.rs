//! Configuration management for the KKBOX client.
//!
//! Values are read from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults for the endpoint URLs and territory

use std::{env, path::PathBuf};

use crate::{
    error::{KkboxError, Result},
    types::Territory,
};

pub const DEFAULT_API_URL: &str = "https://api.kkbox.com/v1.1";
pub const DEFAULT_TOKEN_URL: &str = "https://account.kkbox.com/oauth2/token";

/// Directory holding the `.env` file and the token cache.
///
/// - Linux: `~/.local/share/kkbox`
/// - macOS: `~/Library/Application Support/kkbox`
/// - Windows: `%LOCALAPPDATA%/kkbox`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("kkbox");
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is not an error,
/// since every value can also come straight from the environment; a file that
/// exists but cannot be parsed is.
pub async fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| KkboxError::Config(format!("cannot load {}: {}", path.display(), e)))?;
    log::debug!("loaded env file {}", path.display());
    Ok(())
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(KkboxError::Config(format!("{} must be set", key))),
    }
}

/// Returns the client ID registered on the KKBOX developer site
/// (`KKBOX_CLIENT_ID`).
pub fn kkbox_client_id() -> Result<String> {
    required("KKBOX_CLIENT_ID")
}

/// Returns the client secret matching [`kkbox_client_id`]
/// (`KKBOX_CLIENT_SECRET`). Never log this value.
pub fn kkbox_client_secret() -> Result<String> {
    required("KKBOX_CLIENT_SECRET")
}

/// Returns the Open API base URL (`KKBOX_API_URL`, default
/// `https://api.kkbox.com/v1.1`).
pub fn kkbox_api_url() -> String {
    env::var("KKBOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint (`KKBOX_TOKEN_URL`, default
/// `https://account.kkbox.com/oauth2/token`).
pub fn kkbox_token_url() -> String {
    env::var("KKBOX_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the default territory (`KKBOX_TERRITORY`, default `TW`).
///
/// An unparsable value falls back to `TW` with a warning in the log.
pub fn kkbox_territory() -> Territory {
    match env::var("KKBOX_TERRITORY") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("ignoring KKBOX_TERRITORY: {}", e);
            Territory::default()
        }),
        Err(_) => Territory::default(),
    }
}
