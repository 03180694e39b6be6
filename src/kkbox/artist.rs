use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Fetches artist metadata, albums, top tracks and related artists.
#[derive(Debug, Clone)]
pub struct ArtistFetcher {
    http: HttpClient,
    territory: Territory,
    artist_id: Option<String>,
}

impl ArtistFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            artist_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_artist_id(mut self, artist_id: impl Into<String>) -> Self {
        self.artist_id = Some(artist_id.into());
        self
    }

    /// `GET /artists/{artist_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.artist_id, "artist")?;
        self.http
            .get(&format!("/artists/{}", id), &Query::for_territory(self.territory))
            .await
    }

    /// `GET /artists/{artist_id}/albums`
    pub async fn fetch_albums(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        self.fetch_list("albums", limit, offset).await
    }

    /// `GET /artists/{artist_id}/top-tracks`
    pub async fn fetch_top_tracks(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.fetch_list("top-tracks", limit, offset).await
    }

    /// `GET /artists/{artist_id}/related-artists`
    pub async fn fetch_related_artists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.fetch_list("related-artists", limit, offset).await
    }

    async fn fetch_list(
        &self,
        list: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        let id = require_id(&self.artist_id, "artist")?;
        self.http
            .get(
                &format!("/artists/{}/{}", id, list),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for ArtistFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
