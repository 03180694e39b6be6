use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

#[derive(Debug, Clone)]
pub struct MoodStationFetcher {
    http: HttpClient,
    territory: Territory,
    station_id: Option<String>,
}

impl MoodStationFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            station_id: None,
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    pub fn with_mood_station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    /// `GET /mood-stations`
    pub async fn fetch_all_mood_stations(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/mood-stations",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    /// `GET /mood-stations/{station_id}`, including the station's tracks.
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.station_id, "mood station")?;
        self.http
            .get(
                &format!("/mood-stations/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }
}

impl Fetcher for MoodStationFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
