//! # KKBOX Open API Module
//!
//! Thin wrappers over the KKBOX Open API (`https://api.kkbox.com/v1.1`). Each
//! resource kind has its own fetcher; all of them share one authenticated
//! [`HttpClient`] and the cursor pagination of the [`Fetcher`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, tests)
//!          ↓
//! Resource Fetchers (search, track, album, artist, playlists, stations, charts)
//!          ↓
//! Pagination (paging.next cursors)
//!          ↓
//! Transport (HttpClient, bearer token)
//!          ↓
//! KKBOX Open API
//! ```
//!
//! ## Responses
//!
//! Every call returns `Result<Envelope, KkboxError>`. An `Ok` envelope carries
//! the HTTP status even for 4xx/5xx answers; `Err` means no response was
//! obtained (network failure) or the client was misused (missing ID, no next
//! page).
//!
//! ## Fetchers
//!
//! Fetchers are configured with consuming `with_*` builders and are immutable
//! afterwards, so one configured fetcher can be shared between concurrent
//! calls. Every request carries the `territory` query parameter (`TW` unless
//! set otherwise).
//!
//! | Fetcher | Endpoints |
//! |---|---|
//! | [`search::SearchFetcher`] | `/search` |
//! | [`track::TrackFetcher`] | `/tracks/{id}` |
//! | [`album::AlbumFetcher`] | `/albums/{id}`, `/albums/{id}/tracks` |
//! | [`artist::ArtistFetcher`] | `/artists/{id}`, `/albums`, `/top-tracks`, `/related-artists` |
//! | [`shared_playlist::SharedPlaylistFetcher`] | `/shared-playlists/{id}`, `/tracks` |
//! | [`featured_playlist::FeaturedPlaylistFetcher`] | `/featured-playlists` |
//! | [`featured_playlist_category::FeaturedPlaylistCategoryFetcher`] | `/featured-playlist-categories[/{id}[/playlists]]` |
//! | [`new_release_category::NewReleaseCategoryFetcher`] | `/new-release-categories[/{id}[/albums]]` |
//! | [`new_hits_playlist::NewHitsPlaylistFetcher`] | `/new-hits-playlists[/{id}[/tracks]]` |
//! | [`mood_station::MoodStationFetcher`] | `/mood-stations[/{id}]` |
//! | [`genre_station::GenreStationFetcher`] | `/genre-stations[/{id}]` |
//! | [`chart::ChartFetcher`] | `/charts[/{id}[/tracks]]` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kkbox_sdk::kkbox::{Fetcher, HttpClient, auth::Auth, album::AlbumFetcher};
//!
//! # async fn run() -> kkbox_sdk::Result<()> {
//! let token = Auth::from_env()?.fetch_access_token().await?;
//! let http = HttpClient::new(token.access_token);
//!
//! let albums = AlbumFetcher::new(http).with_album_id("Ks8MAYNedkIB_sGajW");
//! let mut page = albums.fetch_tracks(Some(1), None).await?;
//! while albums.has_next_page(&page) {
//!     page = albums.fetch_next_page(&page).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod album;
pub mod artist;
pub mod auth;
pub mod chart;
pub mod featured_playlist;
pub mod featured_playlist_category;
pub mod genre_station;
pub mod http;
pub mod mood_station;
pub mod new_hits_playlist;
pub mod new_release_category;
pub mod paging;
pub mod search;
pub mod shared_playlist;
pub mod track;
pub mod widget;

pub use http::HttpClient;
pub use paging::Fetcher;

use crate::error::{KkboxError, Result};

pub(crate) fn require_id<'a>(id: &'a Option<String>, what: &'static str) -> Result<&'a str> {
    id.as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(KkboxError::MissingId(what))
}
