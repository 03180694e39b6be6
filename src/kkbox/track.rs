use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
        widget::widget_uri,
    },
    types::{Envelope, Territory, WidgetType},
};

/// Fetches track metadata.
#[derive(Debug, Clone)]
pub struct TrackFetcher {
    http: HttpClient,
    territory: Territory,
    track_id: Option<String>,
}

impl TrackFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            track_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_track_id(mut self, track_id: impl Into<String>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    /// `GET /tracks/{track_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.track_id, "track")?;
        self.http
            .get(&format!("/tracks/{}", id), &Query::for_territory(self.territory))
            .await
    }

    /// Embeddable player URL for the configured track.
    pub fn widget_uri(&self) -> Result<String> {
        let id = require_id(&self.track_id, "track")?;
        Ok(widget_uri(id, WidgetType::Song))
    }
}

impl Fetcher for TrackFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
