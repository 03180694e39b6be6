use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Browses new-release categories and the albums inside them.
#[derive(Debug, Clone)]
pub struct NewReleaseCategoryFetcher {
    http: HttpClient,
    territory: Territory,
    category_id: Option<String>,
}

impl NewReleaseCategoryFetcher {
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

    /// `GET /new-release-categories`
    pub async fn fetch_all_new_release_categories(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/new-release-categories",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    /// `GET /new-release-categories/{category_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.category_id, "category")?;
        self.http
            .get(
                &format!("/new-release-categories/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }

    /// `GET /new-release-categories/{category_id}/albums`
    pub async fn fetch_albums(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Envelope> {
        let id = require_id(&self.category_id, "category")?;
        self.http
            .get(
                &format!("/new-release-categories/{}/albums", id),
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for NewReleaseCategoryFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
