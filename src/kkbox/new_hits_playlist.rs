use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Browses the "new hits" playlists.
#[derive(Debug, Clone)]
pub struct NewHitsPlaylistFetcher {
    http: HttpClient,
    territory: Territory,
    playlist_id: Option<String>,
}

impl NewHitsPlaylistFetcher {
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

    /// `GET /new-hits-playlists`
    pub async fn fetch_all_new_hits_playlists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/new-hits-playlists",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    /// `GET /new-hits-playlists/{playlist_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "playlist")?;
        self.http
            .get(
                &format!("/new-hits-playlists/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }

    /// `GET /new-hits-playlists/{playlist_id}/tracks`
    pub async fn fetch_tracks(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "playlist")?;
        self.http
            .get(
                &format!("/new-hits-playlists/{}/tracks", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for NewHitsPlaylistFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
