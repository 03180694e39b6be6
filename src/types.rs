use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tabled::Tabled;

use crate::error::{KkboxError, Result};

/// Uniform wrapper around every API response.
///
/// `status` is the HTTP status code as returned by the service, so 4xx/5xx
/// responses are still envelopes; `data` is the decoded JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes `data` into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }

    /// Items of a list response (`data.data`), or an empty slice.
    pub fn items(&self) -> &[Value] {
        self.data
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

/// KKBOX market a catalog request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Territory {
    #[default]
    TW,
    HK,
    SG,
    MY,
    JP,
}

impl Territory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Territory::TW => "TW",
            Territory::HK => "HK",
            Territory::SG => "SG",
            Territory::MY => "MY",
            Territory::JP => "JP",
        }
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Territory {
    type Err = KkboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TW" => Ok(Territory::TW),
            "HK" => Ok(Territory::HK),
            "SG" => Ok(Territory::SG),
            "MY" => Ok(Territory::MY),
            "JP" => Ok(Territory::JP),
            other => Err(KkboxError::InvalidArgument(format!(
                "unknown territory '{}'",
                other
            ))),
        }
    }
}

/// Result section of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Track,
    Album,
    Artist,
    Playlist,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Track => "track",
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
        }
    }

    /// Key of the section in the search response (`tracks`, `albums`, ...).
    pub fn section(&self) -> &'static str {
        match self {
            SearchType::Track => "tracks",
            SearchType::Album => "albums",
            SearchType::Artist => "artists",
            SearchType::Playlist => "playlists",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = KkboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(SearchType::Track),
            "album" => Ok(SearchType::Album),
            "artist" => Ok(SearchType::Artist),
            "playlist" => Ok(SearchType::Playlist),
            other => Err(KkboxError::InvalidArgument(format!(
                "unknown search type '{}'",
                other
            ))),
        }
    }
}

/// Kind of embeddable player a widget URI points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
    Song,
    Album,
    Playlist,
}

impl WidgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Song => "song",
            WidgetType::Album => "album",
            WidgetType::Playlist => "playlist",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = KkboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "song" | "track" => Ok(WidgetType::Song),
            "album" => Ok(WidgetType::Album),
            "playlist" => Ok(WidgetType::Playlist),
            other => Err(KkboxError::InvalidArgument(format!(
                "unknown widget type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Paging,
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    #[serde(default)]
    pub explicitness: bool,
    #[serde(default)]
    pub available_territories: Vec<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub artist: Option<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub duration: u64,
    pub isrc: Option<String>,
    pub url: Option<String>,
    pub track_number: Option<u32>,
    #[serde(default)]
    pub explicitness: bool,
    #[serde(default)]
    pub available_territories: Vec<String>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub updated_at: Option<String>,
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Mood and genre stations share one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub tracks: Option<Page<Track>>,
    pub albums: Option<Page<Album>>,
    pub artists: Option<Page<Artist>>,
    pub playlists: Option<Page<Playlist>>,
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Tabled)]
pub struct ItemTableRow {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    #[tabled(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
    pub detail: String,
}
