use crate::{
    cli::{PageOptions, Settings, collect_pages, render_object, render_pages, with_spinner},
    error, info,
    kkbox::{
        album::AlbumFetcher, artist::ArtistFetcher, shared_playlist::SharedPlaylistFetcher,
        track::TrackFetcher,
    },
};

/// Which list of an artist to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArtistList {
    Albums,
    TopTracks,
    Related,
}

pub async fn track(settings: Settings, id: String) {
    let fetcher = TrackFetcher::new(super::connect().await)
        .with_territory(settings.territory)
        .with_track_id(id);

    match with_spinner("Fetching track...", fetcher.fetch_metadata()).await {
        Ok(envelope) => render_object(settings, &envelope),
        Err(e) => error!("Failed to fetch track. Err: {}", e),
    }
    if let Ok(uri) = fetcher.widget_uri() {
        info!("Widget: {}", uri);
    }
}

pub async fn album(settings: Settings, id: String, tracks: bool, page: PageOptions) {
    let fetcher = AlbumFetcher::new(super::connect().await)
        .with_territory(settings.territory)
        .with_album_id(id);

    if !tracks {
        match with_spinner("Fetching album...", fetcher.fetch_metadata()).await {
            Ok(envelope) => render_object(settings, &envelope),
            Err(e) => error!("Failed to fetch album. Err: {}", e),
        }
        if let Ok(uri) = fetcher.widget_uri() {
            info!("Widget: {}", uri);
        }
        return;
    }

    let first = match with_spinner(
        "Fetching album tracks...",
        fetcher.fetch_tracks(page.limit, page.offset),
    )
    .await
    {
        Ok(envelope) => envelope,
        Err(e) => error!("Failed to fetch album tracks. Err: {}", e),
    };
    match collect_pages(&fetcher, first, page.all).await {
        Ok(pages) => render_pages(settings, &pages),
        Err(e) => error!("Failed to fetch next page. Err: {}", e),
    }
}

pub async fn artist(settings: Settings, id: String, list: Option<ArtistList>, page: PageOptions) {
    let fetcher = ArtistFetcher::new(super::connect().await)
        .with_territory(settings.territory)
        .with_artist_id(id);

    let Some(list) = list else {
        match with_spinner("Fetching artist...", fetcher.fetch_metadata()).await {
            Ok(envelope) => render_object(settings, &envelope),
            Err(e) => error!("Failed to fetch artist. Err: {}", e),
        }
        return;
    };

    let request = async {
        match list {
            ArtistList::Albums => fetcher.fetch_albums(page.limit, page.offset).await,
            ArtistList::TopTracks => fetcher.fetch_top_tracks(page.limit, page.offset).await,
            ArtistList::Related => fetcher.fetch_related_artists(page.limit, page.offset).await,
        }
    };
    let first = match with_spinner("Fetching artist list...", request).await {
        Ok(envelope) => envelope,
        Err(e) => error!("Failed to fetch artist list. Err: {}", e),
    };
    match collect_pages(&fetcher, first, page.all).await {
        Ok(pages) => render_pages(settings, &pages),
        Err(e) => error!("Failed to fetch next page. Err: {}", e),
    }
}

pub async fn playlist(settings: Settings, id: String, tracks: bool, page: PageOptions) {
    let fetcher = SharedPlaylistFetcher::new(super::connect().await)
        .with_territory(settings.territory)
        .with_playlist_id(id);

    if !tracks {
        match with_spinner("Fetching playlist...", fetcher.fetch_metadata()).await {
            Ok(envelope) => render_object(settings, &envelope),
            Err(e) => error!("Failed to fetch playlist. Err: {}", e),
        }
        if let Ok(uri) = fetcher.widget_uri() {
            info!("Widget: {}", uri);
        }
        return;
    }

    let first = match with_spinner(
        "Fetching playlist tracks...",
        fetcher.fetch_tracks(page.limit, page.offset),
    )
    .await
    {
        Ok(envelope) => envelope,
        Err(e) => error!("Failed to fetch playlist tracks. Err: {}", e),
    };
    match collect_pages(&fetcher, first, page.all).await {
        Ok(pages) => render_pages(settings, &pages),
        Err(e) => error!("Failed to fetch next page. Err: {}", e),
    }
}
