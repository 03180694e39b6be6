//! KKBOX Open API client library
//!
//! This library wraps the KKBOX Open API: search, tracks, albums, artists,
//! playlists, stations and charts. It includes the authenticated transport,
//! per-resource fetchers with cursor pagination, a token cache for command-line
//! use, and the CLI implementation driving them.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every operation
//! - `kkbox` - Open API transport, pagination and resource fetchers
//! - `management` - Token caching for the CLI
//! - `types` - Envelope, enumerations and response models
//!
//! # Example
//!
//! ```
//! use kkbox_sdk::kkbox::{HttpClient, auth::Auth, track::TrackFetcher};
//!
//! #[tokio::main]
//! async fn main() -> kkbox_sdk::Result<()> {
//!     let token = Auth::from_env()?.fetch_access_token().await?;
//!     let tracks = TrackFetcher::new(HttpClient::new(token.access_token))
//!         .with_track_id("KpnEGVHEsGgkoB0MBk");
//!     let envelope = tracks.fetch_metadata().await?;
//!     println!("{} {}", envelope.status, tracks.widget_uri()?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod kkbox;
pub mod management;
pub mod types;

pub use error::{KkboxError, Result};

/// Result type used by the command-line layer, where errors of every origin
/// end up in front of the user.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Fetching page {}", page);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with exit code 1. Only for fatal errors in the binary.
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
