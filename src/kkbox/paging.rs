use async_trait::async_trait;

use crate::{
    error::{KkboxError, Result},
    kkbox::http::HttpClient,
    types::Envelope,
};

/// JSON pointer of the cursor in a plain list response.
pub const NEXT_PAGE_POINTER: &str = "/paging/next";

/// Returns the next-page URL found at `pointer` inside `envelope.data`.
///
/// `None` when any segment of the path is missing, the cursor is `null`, not
/// a string, or empty.
pub fn next_page_url_at<'a>(envelope: &'a Envelope, pointer: &str) -> Option<&'a str> {
    envelope
        .data
        .pointer(pointer)
        .and_then(|next| next.as_str())
        .filter(|next| !next.is_empty())
}

pub fn next_page_url(envelope: &Envelope) -> Option<&str> {
    next_page_url_at(envelope, NEXT_PAGE_POINTER)
}

pub fn has_next_page(envelope: &Envelope) -> bool {
    next_page_url(envelope).is_some()
}

/// Follows the cursor at `pointer`, or fails with [`KkboxError::NoNextPage`].
pub async fn fetch_next_page_at(
    http: &HttpClient,
    envelope: &Envelope,
    pointer: &str,
) -> Result<Envelope> {
    let url = next_page_url_at(envelope, pointer).ok_or(KkboxError::NoNextPage)?;
    http.get_url(url).await
}

pub async fn fetch_next_page(http: &HttpClient, envelope: &Envelope) -> Result<Envelope> {
    fetch_next_page_at(http, envelope, NEXT_PAGE_POINTER).await
}

/// Capability shared by every resource fetcher: access to the transport and
/// cursor-based pagination over the envelopes it returns.
///
/// Calling `fetch_next_page` on a single-resource response (no `paging`
/// object) fails with [`KkboxError::NoNextPage`].
#[async_trait]
pub trait Fetcher: Sync {
    fn http(&self) -> &HttpClient;

    fn has_next_page(&self, envelope: &Envelope) -> bool {
        has_next_page(envelope)
    }

    async fn fetch_next_page(&self, envelope: &Envelope) -> Result<Envelope> {
        fetch_next_page(self.http(), envelope).await
    }
}
