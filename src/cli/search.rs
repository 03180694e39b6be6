use serde_json::Value;
use tabled::Table;

use crate::{
    Res,
    cli::{PageOptions, Settings, render_pages, spinner, text, with_spinner},
    error,
    kkbox::{
        HttpClient,
        search::{SearchFetcher, SearchFilter},
    },
    types::{Envelope, SearchTableRow, SearchType},
    warning,
};

const SECTIONS: [SearchType; 4] = [
    SearchType::Track,
    SearchType::Album,
    SearchType::Artist,
    SearchType::Playlist,
];

pub async fn search(
    settings: Settings,
    query: String,
    types: Vec<SearchType>,
    filter: SearchFilter,
    page: PageOptions,
) {
    let http: HttpClient = super::connect().await;
    let fetcher = SearchFetcher::new(http)
        .with_territory(settings.territory)
        .with_search_criteria(query.clone(), &types)
        .filter(filter);

    let first = match with_spinner(
        &format!("Searching for '{}'...", query),
        fetcher.fetch_search_result(page.limit, page.offset),
    )
    .await
    {
        Ok(envelope) => envelope,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    let sections = if types.is_empty() { SECTIONS.to_vec() } else { types };
    let pages = match collect_sections(&fetcher, first, &sections, page.all).await {
        Ok(pages) => pages,
        Err(e) => error!("Failed to fetch next page. Err: {}", e),
    };

    if settings.raw {
        render_pages(settings, &pages);
        return;
    }

    let rows: Vec<SearchTableRow> = pages
        .iter()
        .filter(|p| p.is_success())
        .flat_map(search_rows)
        .collect();

    if rows.is_empty() {
        match pages.iter().find(|p| !p.is_success()) {
            Some(failed) => warning!("KKBOX answered with status {}", failed.status),
            None => warning!("Nothing found for '{}'.", query),
        }
        return;
    }

    println!("{}", Table::new(rows));
}

/// Search results page per section, so `--all` follows every requested
/// section's own cursor.
async fn collect_sections(
    fetcher: &SearchFetcher,
    first: Envelope,
    sections: &[SearchType],
    all: bool,
) -> Res<Vec<Envelope>> {
    let mut pages = vec![first];
    if !all || !pages[0].is_success() {
        return Ok(pages);
    }

    let pb = spinner("Fetching next page...");
    for &section in sections {
        let mut last = pages[0].clone();
        while last.is_success() && fetcher.has_next_page_of(&last, section) {
            let next = match fetcher.fetch_next_page_of(&last, section).await {
                Ok(next) => next,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e.into());
                }
            };
            pages.push(next.clone());
            pb.set_message(format!("Fetched {} pages...", pages.len()));
            last = next;
        }
    }
    pb.finish_and_clear();

    Ok(pages)
}

fn search_rows(envelope: &Envelope) -> Vec<SearchTableRow> {
    let mut rows = Vec::new();
    for section in SECTIONS {
        let items = envelope
            .data
            .pointer(&format!("/{}/data", section.section()))
            .and_then(Value::as_array);

        for item in items.into_iter().flatten() {
            rows.push(SearchTableRow {
                kind: section.to_string(),
                id: text(item, "/id"),
                name: match section {
                    SearchType::Playlist => text(item, "/title"),
                    _ => text(item, "/name"),
                },
                detail: match section {
                    SearchType::Track => text(item, "/album/name"),
                    SearchType::Album => text(item, "/artist/name"),
                    SearchType::Artist => String::new(),
                    SearchType::Playlist => text(item, "/owner/name"),
                },
            });
        }
    }
    rows
}
