use crate::{
    error::Result,
    kkbox::{
        Fetcher,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

/// Lists the playlists featured by KKBOX editors.
#[derive(Debug, Clone)]
pub struct FeaturedPlaylistFetcher {
    http: HttpClient,
    territory: Territory,
}

impl FeaturedPlaylistFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    /// `GET /featured-playlists`
    pub async fn fetch_all_featured_playlists(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/featured-playlists",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }
}

impl Fetcher for FeaturedPlaylistFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
