use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Fetches chart playlists.
///
/// The chart list fits on a single page, so `has_next_page` is false for the
/// `fetch_charts` envelope.
#[derive(Debug, Clone)]
pub struct ChartFetcher {
    http: HttpClient,
    territory: Territory,
    playlist_id: Option<String>,
}

impl ChartFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            playlist_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = Some(playlist_id.into());
        self
    }

    /// `GET /charts`
    pub async fn fetch_charts(&self) -> Result<Envelope> {
        self.http
            .get("/charts", &Query::for_territory(self.territory))
            .await
    }

    /// `GET /charts/{playlist_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "chart playlist")?;
        self.http
            .get(&format!("/charts/{}", id), &Query::for_territory(self.territory))
            .await
    }

    /// `GET /charts/{playlist_id}/tracks`
    pub async fn fetch_tracks(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "chart playlist")?;
        self.http
            .get(
                &format!("/charts/{}/tracks", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for ChartFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
