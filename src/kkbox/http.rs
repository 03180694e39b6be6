use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use crate::{config, error::Result, types::Envelope, types::Territory};

/// Query parameters of a catalog request.
///
/// Optional values are skipped entirely rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_territory(territory: Territory) -> Self {
        Self::new().param("territory", territory.as_str())
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn optional(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v.to_string()),
            None => self,
        }
    }

    pub fn page(self, limit: Option<u32>, offset: Option<u32>) -> Self {
        self.optional("limit", limit).optional("offset", offset)
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Authenticated transport shared by every fetcher.
///
/// Cloning is cheap: the connection pool and the token are shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    token: Arc<str>,
    base_url: Arc<str>,
}

impl HttpClient {
    /// Creates a client for the configured API base URL.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, config::kkbox_api_url())
    }

    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            token: Arc::from(access_token.into()),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET <base_url><path>` with the given query.
    ///
    /// Any HTTP response resolves to an [`Envelope`]; only network-level
    /// failures are returned as errors.
    pub async fn get(&self, path: &str, query: &Query) -> Result<Envelope> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query.as_slice());
        let request = self.client.get(&url).query(query.as_slice());
        self.send(request).await
    }

    /// Issues a GET against an absolute URL, e.g. a `paging.next` cursor.
    pub async fn get_url(&self, url: &str) -> Result<Envelope> {
        log::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Envelope> {
        let response = request.bearer_auth(&*self.token).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::trace!("status {} ({} bytes)", status, body.len());

        Ok(Envelope::new(status, parse_body(&body)))
    }
}

fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(body).unwrap_or_else(|e| {
        log::debug!("response body is not JSON: {}", e);
        Value::String(body.to_string())
    })
}
