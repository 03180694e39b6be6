use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::{KkboxError, Result},
    kkbox::{
        Fetcher,
        http::{HttpClient, Query},
        paging,
    },
    types::{Envelope, SearchType, Territory},
};

/// Client-side narrowing of search results.
///
/// Every condition is a case-sensitive substring match; unset conditions don't
/// filter anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub track: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub playlist: Option<String>,
    pub available_territory: Option<Territory>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drops the items of each result section that don't satisfy the filter.
    /// Paging and summary objects are left as they were.
    pub fn apply(&self, data: &mut Value) {
        retain(data, SearchType::Track, |track| {
            contains(track.pointer("/name"), &self.track)
                && contains(track.pointer("/album/name"), &self.album)
                && contains(track.pointer("/album/artist/name"), &self.artist)
                && available_in(track, self.available_territory)
        });
        retain(data, SearchType::Album, |album| {
            contains(album.pointer("/name"), &self.album)
                && contains(album.pointer("/artist/name"), &self.artist)
                && available_in(album, self.available_territory)
        });
        retain(data, SearchType::Artist, |artist| {
            contains(artist.pointer("/name"), &self.artist)
        });
        retain(data, SearchType::Playlist, |playlist| {
            contains(playlist.pointer("/title"), &self.playlist)
        });
    }
}

fn retain(data: &mut Value, section: SearchType, keep: impl Fn(&Value) -> bool) {
    if let Some(items) = data
        .get_mut(section.section())
        .and_then(|s| s.get_mut("data"))
        .and_then(Value::as_array_mut)
    {
        items.retain(|item| keep(item));
    }
}

fn contains(value: Option<&Value>, needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(needle) => value
            .and_then(Value::as_str)
            .is_some_and(|v| v.contains(needle.as_str())),
    }
}

fn available_in(item: &Value, territory: Option<Territory>) -> bool {
    match territory {
        None => true,
        Some(territory) => item
            .get("available_territories")
            .and_then(Value::as_array)
            .is_some_and(|all| all.iter().any(|t| t.as_str() == Some(territory.as_str()))),
    }
}

/// Searches tracks, albums, artists and playlists.
#[derive(Debug, Clone)]
pub struct SearchFetcher {
    http: HttpClient,
    territory: Territory,
    q: Option<String>,
    types: Vec<SearchType>,
    filter: SearchFilter,
}

impl SearchFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            territory: Territory::default(),
            q: None,
            types: Vec::new(),
            filter: SearchFilter::default(),
        }
    }

    pub fn with_territory(mut self, territory: Territory) -> Self {
        self.territory = territory;
        self
    }

    /// Sets the keywords and the result types. An empty `types` lets the
    /// service search every type.
    pub fn with_search_criteria(mut self, q: impl Into<String>, types: &[SearchType]) -> Self {
        self.q = Some(q.into());
        self.types = types.to_vec();
        self
    }

    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filter = filter;
        self
    }

    /// `GET /search?q=..&type=..`, narrowed by the configured filter when the
    /// response is successful.
    pub async fn fetch_search_result(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        let q = self
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| KkboxError::InvalidArgument("search query has not been set".into()))?;

        let mut query = Query::new().param("q", q);
        if !self.types.is_empty() {
            let types = self
                .types
                .iter()
                .map(SearchType::as_str)
                .collect::<Vec<_>>()
                .join(",");
            query = query.param("type", types);
        }
        let query = query
            .param("territory", self.territory.as_str())
            .page(limit, offset);

        let envelope = self.http.get("/search", &query).await?;
        Ok(self.narrow(envelope))
    }

    pub fn has_next_page_of(&self, envelope: &Envelope, section: SearchType) -> bool {
        paging::next_page_url_at(envelope, &section_pointer(section)).is_some()
    }

    /// Follows the cursor of one result section (e.g. `tracks.paging.next`).
    pub async fn fetch_next_page_of(
        &self,
        envelope: &Envelope,
        section: SearchType,
    ) -> Result<Envelope> {
        let next =
            paging::fetch_next_page_at(&self.http, envelope, &section_pointer(section)).await?;
        Ok(self.narrow(next))
    }

    fn narrow(&self, mut envelope: Envelope) -> Envelope {
        if envelope.is_success() && !self.filter.is_empty() {
            self.filter.apply(&mut envelope.data);
        }
        envelope
    }
}

fn section_pointer(section: SearchType) -> String {
    format!("/{}/paging/next", section.section())
}

#[async_trait]
impl Fetcher for SearchFetcher {
    fn http(&self) -> &HttpClient {
        &self.http
    }

    async fn fetch_next_page(&self, envelope: &Envelope) -> Result<Envelope> {
        let next = paging::fetch_next_page(&self.http, envelope).await?;
        Ok(self.narrow(next))
    }
}
