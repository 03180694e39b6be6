use thiserror::Error;

/// Error types for KKBOX Open API operations.
///
/// API-level failures (4xx/5xx) are deliberately absent: they come back as an
/// [`Envelope`](crate::types::Envelope) whose `status` the caller inspects.
/// Only failures that prevent a response from being obtained at all, or
/// misuse of the client itself, end up here.
///
/// ```rust,no_run
/// use kkbox_sdk::{KkboxError, kkbox::{Fetcher, HttpClient, album::AlbumFetcher}};
///
/// # async fn run(http: HttpClient) -> kkbox_sdk::Result<()> {
/// let fetcher = AlbumFetcher::new(http).with_album_id("KmRKnW5qmUrTnGRuxF");
/// let page = fetcher.fetch_tracks(Some(1), None).await?;
/// match fetcher.fetch_next_page(&page).await {
///     Ok(next) => println!("next page status {}", next.status),
///     Err(KkboxError::NoNextPage) => println!("that was the last page"),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum KkboxError {
    /// Network-level failure: DNS, connect, timeout, reset or a body that
    /// could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// `fetch_next_page` was called on an envelope without a `paging.next`
    /// cursor.
    #[error("no next page available")]
    NoNextPage,

    /// A fetch was issued before the resource ID was set, or with an empty ID.
    #[error("{0} id has not been set")]
    MissingId(&'static str),

    /// The token endpoint rejected the client credentials or answered without
    /// an access token.
    #[error("token exchange failed with status {status}: {body}")]
    Auth {
        /// HTTP status returned by the token endpoint
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Typed decoding of a response body failed.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required configuration value is missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// A value could not be parsed into one of the API's enumerations.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Token cache file access failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KkboxError>;
