//! # CLI Module
//!
//! Command implementations for the `kkbox` binary. Each command builds the
//! matching fetcher, issues the request behind a spinner and renders the
//! envelope either as a table or, with `--raw`, as pretty-printed JSON.
//!
//! ```text
//! CLI Layer (this module)
//!     ↓
//! Management Layer (token cache)
//!     ↓
//! KKBOX Layer (fetchers, pagination, transport)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! kkbox auth                                   # fetch and cache an access token
//! kkbox search "Linkin Park" --type track      # search the catalog
//! kkbox album Ks8MAYNedkIB_sGajW --tracks --all
//! kkbox charts --territory HK
//! kkbox widget KpnEGVHEsGgkoB0MBk --type song  # no request needed
//! ```

mod auth;
mod browse;
mod catalog;
mod search;
mod widget;

pub use auth::auth;
pub use browse::{
    CategoryKind, StationKind, categories, charts, featured, hits, stations,
};
pub use catalog::{ArtistList, album, artist, playlist, track};
pub use search::search;
pub use widget::widget;

use std::{future::Future, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tabled::Table;

use crate::{
    Res, error,
    kkbox::{Fetcher, HttpClient, auth::Auth},
    management::TokenManager,
    types::{Envelope, ItemTableRow, SearchType, Territory, WidgetType},
    warning,
};

/// Options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub territory: Territory,
    pub raw: bool,
}

/// Paging options of list commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub all: bool,
}

pub fn parse_territory(s: &str) -> crate::Result<Territory> {
    s.parse()
}

pub fn parse_search_type(s: &str) -> crate::Result<SearchType> {
    s.parse()
}

pub fn parse_widget_type(s: &str) -> crate::Result<WidgetType> {
    s.parse()
}

/// Builds an authenticated transport from the cached (or freshly requested)
/// token. Exits the program when no token can be obtained.
pub(crate) async fn connect() -> HttpClient {
    let auth = match Auth::from_env() {
        Ok(auth) => auth,
        Err(e) => error!("{}. Add it to the environment or the .env file.", e),
    };

    let mut token_mgr = match TokenManager::obtain(&auth).await {
        Ok(mgr) => mgr,
        Err(e) => error!("Failed to obtain an access token. Err: {}", e),
    };

    match token_mgr.get_valid_token(&auth).await {
        Ok(token) => HttpClient::new(token),
        Err(e) => error!("Failed to refresh the access token. Err: {}", e),
    }
}

pub(crate) fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Runs a request behind a spinner.
pub(crate) async fn with_spinner<F>(message: &str, request: F) -> Res<Envelope>
where
    F: Future<Output = crate::Result<Envelope>>,
{
    let pb = spinner(message);
    let result = request.await;
    pb.finish_and_clear();
    Ok(result?)
}

/// Follows `paging.next` from `first` when `all` is set; otherwise returns
/// `first` alone. Stops at the first non-success page.
pub(crate) async fn collect_pages<F: Fetcher>(
    fetcher: &F,
    first: Envelope,
    all: bool,
) -> Res<Vec<Envelope>> {
    let mut pages = vec![first];
    if !all {
        return Ok(pages);
    }

    let pb = spinner("Fetching next page...");
    loop {
        let last = &pages[pages.len() - 1];
        if !last.is_success() || !fetcher.has_next_page(last) {
            break;
        }
        match fetcher.fetch_next_page(last).await {
            Ok(next) => {
                pages.push(next);
                pb.set_message(format!("Fetched {} pages...", pages.len()));
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    pb.finish_and_clear();

    Ok(pages)
}

/// Prints a list of pages: raw JSON or a single table over all items.
pub(crate) fn render_pages(settings: Settings, pages: &[Envelope]) {
    if settings.raw {
        for page in pages {
            print_raw(page);
        }
        return;
    }

    let mut rows = Vec::new();
    for page in pages {
        if !report_status(page) {
            continue;
        }
        rows.extend(page.items().iter().map(item_row));
    }

    if rows.is_empty() {
        warning!("Nothing found.");
        return;
    }
    println!("{}", Table::new(rows));
}

/// Prints a single-resource response.
pub(crate) fn render_object(settings: Settings, envelope: &Envelope) {
    if settings.raw {
        print_raw(envelope);
        return;
    }

    if report_status(envelope) {
        println!("{}", Table::new(vec![item_row(&envelope.data)]));
    }
}

fn print_raw(envelope: &Envelope) {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => println!("{}", json),
        Err(e) => warning!("Cannot print response. Err: {}", e),
    }
}

/// Warns about a non-success status. Returns whether the envelope is usable.
fn report_status(envelope: &Envelope) -> bool {
    if envelope.is_success() {
        return true;
    }

    let message = envelope
        .data
        .pointer("/error/message")
        .and_then(Value::as_str)
        .unwrap_or("no details");
    warning!("KKBOX answered with status {}: {}", envelope.status, message);
    false
}

pub(crate) fn item_row(item: &Value) -> ItemTableRow {
    ItemTableRow {
        id: text(item, "/id"),
        name: item
            .get("name")
            .or_else(|| item.get("title"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        url: text(item, "/url"),
    }
}

pub(crate) fn text(item: &Value, pointer: &str) -> String {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
