use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
        widget::widget_uri,
    },
    types::{Envelope, Territory, WidgetType},
};

/// Fetches playlists shared by KKBOX users.
#[derive(Debug, Clone)]
pub struct SharedPlaylistFetcher {
    http: HttpClient,
    territory: Territory,
    playlist_id: Option<String>,
}

impl SharedPlaylistFetcher {
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

    /// `GET /shared-playlists/{playlist_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "playlist")?;
        self.http
            .get(
                &format!("/shared-playlists/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }

    /// `GET /shared-playlists/{playlist_id}/tracks`
    pub async fn fetch_tracks(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        let id = require_id(&self.playlist_id, "playlist")?;
        self.http
            .get(
                &format!("/shared-playlists/{}/tracks", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    pub fn widget_uri(&self) -> Result<String> {
        let id = require_id(&self.playlist_id, "playlist")?;
        Ok(widget_uri(id, WidgetType::Playlist))
    }
}

impl Fetcher for SharedPlaylistFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
