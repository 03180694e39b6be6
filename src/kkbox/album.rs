use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
        widget::widget_uri,
    },
    types::{Envelope, Territory, WidgetType},
};

/// Fetches album metadata and the album's track list.
#[derive(Debug, Clone)]
pub struct AlbumFetcher {
    http: HttpClient,
    territory: Territory,
    album_id: Option<String>,
}

impl AlbumFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            album_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_album_id(mut self, album_id: impl Into<String>) -> Self {
        self.album_id = Some(album_id.into());
        self
    }

    /// `GET /albums/{album_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.album_id, "album")?;
        self.http
            .get(&format!("/albums/{}", id), &Query::for_territory(self.territory))
            .await
    }

    /// `GET /albums/{album_id}/tracks`, paginated.
    pub async fn fetch_tracks(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        let id = require_id(&self.album_id, "album")?;
        self.http
            .get(
                &format!("/albums/{}/tracks", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    pub fn widget_uri(&self) -> Result<String> {
        let id = require_id(&self.album_id, "album")?;
        Ok(widget_uri(id, WidgetType::Album))
    }
}

impl Fetcher for AlbumFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
