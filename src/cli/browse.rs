use crate::{
    cli::{PageOptions, Settings, collect_pages, render_object, render_pages, with_spinner},
    error,
    kkbox::{
        Fetcher, HttpClient, chart::ChartFetcher, featured_playlist::FeaturedPlaylistFetcher,
        featured_playlist_category::FeaturedPlaylistCategoryFetcher,
        genre_station::GenreStationFetcher, mood_station::MoodStationFetcher,
        new_hits_playlist::NewHitsPlaylistFetcher,
        new_release_category::NewReleaseCategoryFetcher,
    },
    types::Envelope,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryKind {
    /// Featured playlist categories
    Featured,
    /// New release categories
    NewRelease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StationKind {
    Mood,
    Genre,
}

async fn list<F: Fetcher>(
    settings: Settings,
    fetcher: &F,
    message: &str,
    request: impl Future<Output = crate::Result<Envelope>>,
    all: bool,
) {
    let first = match with_spinner(message, request).await {
        Ok(envelope) => envelope,
        Err(e) => error!("Request failed. Err: {}", e),
    };
    match collect_pages(fetcher, first, all).await {
        Ok(pages) => render_pages(settings, &pages),
        Err(e) => error!("Failed to fetch next page. Err: {}", e),
    }
}

async fn single(
    settings: Settings,
    message: &str,
    request: impl Future<Output = crate::Result<Envelope>>,
) {
    match with_spinner(message, request).await {
        Ok(envelope) => render_object(settings, &envelope),
        Err(e) => error!("Request failed. Err: {}", e),
    }
}

pub async fn featured(settings: Settings, page: PageOptions) {
    let fetcher =
        FeaturedPlaylistFetcher::new(super::connect().await).with_territory(settings.territory);
    list(
        settings,
        &fetcher,
        "Fetching featured playlists...",
        fetcher.fetch_all_featured_playlists(page.limit, page.offset),
        page.all,
    )
    .await;
}

/// Lists categories, shows one category, or (with `items`) the playlists or
/// albums filed under it.
pub async fn categories(
    settings: Settings,
    kind: CategoryKind,
    id: Option<String>,
    items: bool,
    page: PageOptions,
) {
    let http: HttpClient = super::connect().await;

    match kind {
        CategoryKind::Featured => {
            let fetcher =
                FeaturedPlaylistCategoryFetcher::new(http).with_territory(settings.territory);
            match id {
                None => {
                    list(
                        settings,
                        &fetcher,
                        "Fetching featured playlist categories...",
                        fetcher.fetch_all_featured_playlist_categories(page.limit, page.offset),
                        page.all,
                    )
                    .await
                }
                Some(id) => {
                    let fetcher = fetcher.with_category_id(id);
                    if items {
                        list(
                            settings,
                            &fetcher,
                            "Fetching category playlists...",
                            fetcher.fetch_playlists(page.limit, page.offset),
                            page.all,
                        )
                        .await
                    } else {
                        single(settings, "Fetching category...", fetcher.fetch_metadata()).await
                    }
                }
            }
        }
        CategoryKind::NewRelease => {
            let fetcher = NewReleaseCategoryFetcher::new(http).with_territory(settings.territory);
            match id {
                None => {
                    list(
                        settings,
                        &fetcher,
                        "Fetching new release categories...",
                        fetcher.fetch_all_new_release_categories(page.limit, page.offset),
                        page.all,
                    )
                    .await
                }
                Some(id) => {
                    let fetcher = fetcher.with_category_id(id);
                    if items {
                        list(
                            settings,
                            &fetcher,
                            "Fetching category albums...",
                            fetcher.fetch_albums(page.limit, page.offset),
                            page.all,
                        )
                        .await
                    } else {
                        single(settings, "Fetching category...", fetcher.fetch_metadata()).await
                    }
                }
            }
        }
    }
}

pub async fn hits(settings: Settings, id: Option<String>, tracks: bool, page: PageOptions) {
    let fetcher =
        NewHitsPlaylistFetcher::new(super::connect().await).with_territory(settings.territory);
    match id {
        None => {
            list(
                settings,
                &fetcher,
                "Fetching new hits playlists...",
                fetcher.fetch_all_new_hits_playlists(page.limit, page.offset),
                page.all,
            )
            .await
        }
        Some(id) => {
            let fetcher = fetcher.with_playlist_id(id);
            if tracks {
                list(
                    settings,
                    &fetcher,
                    "Fetching playlist tracks...",
                    fetcher.fetch_tracks(page.limit, page.offset),
                    page.all,
                )
                .await
            } else {
                single(settings, "Fetching playlist...", fetcher.fetch_metadata()).await
            }
        }
    }
}

pub async fn stations(settings: Settings, kind: StationKind, id: Option<String>, page: PageOptions) {
    let http = super::connect().await;

    match kind {
        StationKind::Mood => {
            let fetcher = MoodStationFetcher::new(http).with_territory(settings.territory);
            match id {
                None => {
                    list(
                        settings,
                        &fetcher,
                        "Fetching mood stations...",
                        fetcher.fetch_all_mood_stations(page.limit, page.offset),
                        page.all,
                    )
                    .await
                }
                Some(id) => {
                    let fetcher = fetcher.with_mood_station_id(id);
                    single(settings, "Fetching station...", fetcher.fetch_metadata()).await
                }
            }
        }
        StationKind::Genre => {
            let fetcher = GenreStationFetcher::new(http).with_territory(settings.territory);
            match id {
                None => {
                    list(
                        settings,
                        &fetcher,
                        "Fetching genre stations...",
                        fetcher.fetch_all_genre_stations(page.limit, page.offset),
                        page.all,
                    )
                    .await
                }
                Some(id) => {
                    let fetcher = fetcher.with_genre_station_id(id);
                    single(settings, "Fetching station...", fetcher.fetch_metadata()).await
                }
            }
        }
    }
}

pub async fn charts(settings: Settings, id: Option<String>, tracks: bool, page: PageOptions) {
    let fetcher = ChartFetcher::new(super::connect().await).with_territory(settings.territory);
    match id {
        None => {
            list(
                settings,
                &fetcher,
                "Fetching charts...",
                fetcher.fetch_charts(),
                page.all,
            )
            .await
        }
        Some(id) => {
            let fetcher = fetcher.with_playlist_id(id);
            if tracks {
                list(
                    settings,
                    &fetcher,
                    "Fetching chart tracks...",
                    fetcher.fetch_tracks(page.limit, page.offset),
                    page.all,
                )
                .await
            } else {
                single(settings, "Fetching chart...", fetcher.fetch_metadata()).await
            }
        }
    }
}
