use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Browses featured playlist categories and the playlists inside them.
#[derive(Debug, Clone)]
pub struct FeaturedPlaylistCategoryFetcher {
    http: HttpClient,
    territory: Territory,
    category_id: Option<String>,
}

impl FeaturedPlaylistCategoryFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            category_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// `GET /featured-playlist-categories`
    pub async fn fetch_all_featured_playlist_categories(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/featured-playlist-categories",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    /// `GET /featured-playlist-categories/{category_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.category_id, "category")?;
        self.http
            .get(
                &format!("/featured-playlist-categories/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }

    /// `GET /featured-playlist-categories/{category_id}/playlists`
    pub async fn fetch_playlists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        let id = require_id(&self.category_id, "category")?;
        self.http
            .get(
                &format!("/featured-playlist-categories/{}/playlists", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for FeaturedPlaylistCategoryFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
