use crate::{
    error::Result,
    kkbox::{
        Fetcher, require_id,
        http::{HttpClient, Query},
    },
    types::{Envelope, Territory},
};

#[derive(Debug, Clone)]
pub struct GenreStationFetcher {
    http: HttpClient,
    territory: Territory,
    station_id: Option<String>,
}

impl GenreStationFetcher {
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

    pub fn with_genre_station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    /// `GET /genre-stations`
    pub async fn fetch_all_genre_stations(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        self.http
            .get(
                "/genre-stations",
                &Query::for_territory(self.territory).page(limit, offset),
            )
            .await
    }

    /// `GET /genre-stations/{station_id}`
    pub async fn fetch_metadata(&self) -> Result<Envelope> {
        let id = require_id(&self.station_id, "genre station")?;
        self.http
            .get(
                &format!("/genre-stations/{}", id),
                &Query::for_territory(self.territory),
            )
            .await
    }
}

impl Fetcher for GenreStationFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }
}
