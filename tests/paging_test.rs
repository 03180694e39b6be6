mod common;

use common::{http, page, track};
use kkbox_sdk::{
    KkboxError,
    kkbox::{
        Fetcher,
        album::AlbumFetcher,
        artist::ArtistFetcher,
        chart::ChartFetcher,
        featured_playlist::FeaturedPlaylistFetcher,
        paging::{has_next_page, next_page_url, next_page_url_at},
        track::TrackFetcher,
    },
    types::Envelope,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path, query_param, query_param_is_missing},
};

#[test]
fn test_has_next_page_without_paging_object() {
    // single-resource responses carry no paging object at all
    let envelope = Envelope::new(200, json!({ "id": "KpnEGVHEsGgkoB0MBk", "name": "Numb" }));
    assert!(!has_next_page(&envelope));
    assert_eq!(next_page_url(&envelope), None);
}

#[test]
fn test_has_next_page_null_empty_and_non_string_cursor() {
    let null_next = Envelope::new(200, page(vec![], None));
    assert!(!has_next_page(&null_next));

    let empty_next = Envelope::new(200, json!({ "data": [], "paging": { "next": "" } }));
    assert!(!has_next_page(&empty_next));

    let numeric_next = Envelope::new(200, json!({ "data": [], "paging": { "next": 2 } }));
    assert!(!has_next_page(&numeric_next));

    let non_object_data = Envelope::new(500, json!("Internal Server Error"));
    assert!(!has_next_page(&non_object_data));
}

#[test]
fn test_has_next_page_with_cursor() {
    let next = "https://api.kkbox.com/v1.1/albums/x/tracks?offset=1&limit=1".to_string();
    let envelope = Envelope::new(200, page(vec![json!({"id": "a"})], Some(next.clone())));

    assert!(has_next_page(&envelope));
    assert_eq!(next_page_url(&envelope), Some(next.as_str()));
}

#[test]
fn test_next_page_url_at_nested_section() {
    let envelope = Envelope::new(
        200,
        json!({
            "tracks": { "data": [], "paging": { "next": "https://example.test/next" } },
            "albums": { "data": [], "paging": { "next": null } },
        }),
    );

    assert_eq!(
        next_page_url_at(&envelope, "/tracks/paging/next"),
        Some("https://example.test/next")
    );
    assert_eq!(next_page_url_at(&envelope, "/albums/paging/next"), None);
    assert_eq!(next_page_url_at(&envelope, "/artists/paging/next"), None);
    // the top-level cursor is absent in this envelope
    assert!(!has_next_page(&envelope));
}

#[tokio::test]
async fn test_fetch_next_page_on_metadata_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = TrackFetcher::new(http(&server)).with_track_id("KpnEGVHEsGgkoB0MBk");
    let metadata = Envelope::new(200, json!({ "id": "KpnEGVHEsGgkoB0MBk" }));

    assert!(!fetcher.has_next_page(&metadata));
    let result = fetcher.fetch_next_page(&metadata).await;
    assert!(matches!(result, Err(KkboxError::NoNextPage)));
}

#[tokio::test]
async fn test_single_track_album_has_no_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/albums/KmRKnW5qmUrTnGRuxF/tracks"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![track("t1", "Only", "Single", "Someone", &["TW"])], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = AlbumFetcher::new(http(&server)).with_album_id("KmRKnW5qmUrTnGRuxF");
    let first = fetcher.fetch_tracks(Some(1), None).await.unwrap();

    assert_eq!(first.status, 200);
    assert_eq!(first.items().len(), 1);
    assert!(!fetcher.has_next_page(&first));
    assert!(matches!(
        fetcher.fetch_next_page(&first).await,
        Err(KkboxError::NoNextPage)
    ));
}

#[tokio::test]
async fn test_fetch_next_page_follows_cursor_with_auth() {
    let server = MockServer::start().await;
    let next = format!(
        "{}/albums/Ks8MAYNedkIB_sGajW/tracks?territory=TW&offset=1&limit=1",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/albums/Ks8MAYNedkIB_sGajW/tracks"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![track("t1", "Cosmic Explorer", "COSMIC EXPLORER", "Perfume", &["TW"])],
            Some(next),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/albums/Ks8MAYNedkIB_sGajW/tracks"))
        .and(query_param("offset", "1"))
        .and(query_param("limit", "1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![track("t2", "Miracle Worker", "COSMIC EXPLORER", "Perfume", &["TW"])],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = AlbumFetcher::new(http(&server)).with_album_id("Ks8MAYNedkIB_sGajW");
    let first = fetcher.fetch_tracks(Some(1), None).await.unwrap();
    assert!(fetcher.has_next_page(&first));

    let second = fetcher.fetch_next_page(&first).await.unwrap();
    assert_eq!(second.status, 200);
    assert!(second.data["data"].is_array());
    assert_eq!(second.items().len(), 1);
    assert_eq!(second.items()[0]["id"], "t2");
    assert!(!fetcher.has_next_page(&second));
}

#[tokio::test]
async fn test_next_page_is_an_independent_snapshot() {
    let server = MockServer::start().await;
    let next = format!("{}/featured-playlists?offset=1&limit=1", server.uri());

    Mock::given(method("GET"))
        .and(path("/featured-playlists"))
        .and(query_param_is_missing("offset"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![json!({"id": "p1", "title": "One"})], Some(next))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/featured-playlists"))
        .and(query_param("offset", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![json!({"id": "p2", "title": "Two"})], None)),
        )
        .mount(&server)
        .await;

    let fetcher = FeaturedPlaylistFetcher::new(http(&server));
    let first = fetcher
        .fetch_all_featured_playlists(Some(1), None)
        .await
        .unwrap();
    let second = fetcher.fetch_next_page(&first).await.unwrap();

    // the first envelope is untouched by fetching the second
    assert_eq!(first.items()[0]["id"], "p1");
    assert_eq!(second.items()[0]["id"], "p2");
}

#[tokio::test]
async fn test_fetch_next_page_surfaces_api_errors_as_status() {
    let server = MockServer::start().await;
    let next = format!("{}/artists/Cnv_K6i5Ft4y41SxLy/albums?offset=500", server.uri());

    Mock::given(method("GET"))
        .and(path("/artists/Cnv_K6i5Ft4y41SxLy/albums"))
        .and(query_param_is_missing("offset"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![json!({"id": "a1", "name": "Hybrid Theory"})], Some(next))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/artists/Cnv_K6i5Ft4y41SxLy/albums"))
        .and(query_param("offset", "500"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "code": 400, "message": "Invalid offset" } })),
        )
        .mount(&server)
        .await;

    let fetcher = ArtistFetcher::new(http(&server)).with_artist_id("Cnv_K6i5Ft4y41SxLy");
    let first = fetcher.fetch_albums(None, None).await.unwrap();
    let next = fetcher.fetch_next_page(&first).await.unwrap();

    assert_eq!(next.status, 400);
    assert!(!next.is_success());
    assert_eq!(next.data["error"]["message"], "Invalid offset");
}

#[tokio::test]
async fn test_charts_fit_on_one_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/charts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                json!({"id": "4mJSYXvueA8t0odsny", "title": "Daily Chart"}),
                json!({"id": "chart-2", "title": "Weekly Chart"}),
            ],
            None,
        )))
        .mount(&server)
        .await;

    let fetcher = ChartFetcher::new(http(&server));
    let charts = fetcher.fetch_charts().await.unwrap();

    assert_eq!(charts.status, 200);
    assert!(!fetcher.has_next_page(&charts));
    assert!(fetcher.fetch_next_page(&charts).await.is_err());
}
