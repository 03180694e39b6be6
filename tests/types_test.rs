use kkbox_sdk::{
    KkboxError,
    kkbox::widget::widget_uri,
    types::{Album, Envelope, Page, SearchType, Territory, Track, WidgetType},
};
use serde_json::json;

#[test]
fn test_territory_parsing() {
    assert_eq!("TW".parse::<Territory>().unwrap(), Territory::TW);
    assert_eq!(" jp ".parse::<Territory>().unwrap(), Territory::JP);
    assert_eq!("my".parse::<Territory>().unwrap(), Territory::MY);
    assert_eq!(Territory::default(), Territory::TW);
    assert_eq!(Territory::SG.to_string(), "SG");

    assert!(matches!(
        "US".parse::<Territory>(),
        Err(KkboxError::InvalidArgument(_))
    ));
}

#[test]
fn test_search_type_parsing() {
    assert_eq!("Track".parse::<SearchType>().unwrap(), SearchType::Track);
    assert_eq!("playlist".parse::<SearchType>().unwrap(), SearchType::Playlist);
    assert_eq!(SearchType::Artist.to_string(), "artist");
    assert_eq!(SearchType::Album.section(), "albums");
    assert!("tracks".parse::<SearchType>().is_err());
}

#[test]
fn test_widget_type_parsing() {
    assert_eq!("song".parse::<WidgetType>().unwrap(), WidgetType::Song);
    assert_eq!("track".parse::<WidgetType>().unwrap(), WidgetType::Song);
    assert_eq!("ALBUM".parse::<WidgetType>().unwrap(), WidgetType::Album);
    assert!("artist".parse::<WidgetType>().is_err());
}

#[test]
fn test_widget_uri() {
    assert_eq!(
        widget_uri("KpnEGVHEsGgkoB0MBk", WidgetType::Song),
        "https://widget.kkbox.com/v1/?id=KpnEGVHEsGgkoB0MBk&type=song"
    );
    assert_eq!(
        widget_uri("KmRKnW5qmUrTnGRuxF", WidgetType::Album),
        "https://widget.kkbox.com/v1/?id=KmRKnW5qmUrTnGRuxF&type=album"
    );
    assert_eq!(
        widget_uri("4nUZM-TY2aVxZ2xaA-", WidgetType::Playlist),
        "https://widget.kkbox.com/v1/?id=4nUZM-TY2aVxZ2xaA-&type=playlist"
    );
}

#[test]
fn test_envelope_success_range() {
    assert!(Envelope::new(200, json!({})).is_success());
    assert!(Envelope::new(204, json!(null)).is_success());
    assert!(!Envelope::new(301, json!(null)).is_success());
    assert!(!Envelope::new(404, json!({})).is_success());
}

#[test]
fn test_envelope_items() {
    let list = Envelope::new(200, json!({ "data": [{ "id": "a" }, { "id": "b" }] }));
    assert_eq!(list.items().len(), 2);

    let single = Envelope::new(200, json!({ "id": "a", "name": "Numb" }));
    assert!(single.items().is_empty());

    let text = Envelope::new(502, json!("Bad Gateway"));
    assert!(text.items().is_empty());
}

#[test]
fn test_envelope_decode_track() {
    let envelope = Envelope::new(
        200,
        json!({
            "id": "KpnEGVHEsGgkoB0MBk",
            "name": "Numb",
            "duration": 185000,
            "isrc": "USWB10301464",
            "url": "https://www.kkbox.com/tw/tc/song/KpnEGVHEsGgkoB0MBk",
            "track_number": 13,
            "explicitness": false,
            "available_territories": ["TW", "HK", "SG", "MY", "JP"],
            "album": {
                "id": "WpTPGzNLeutVFHcFq6",
                "name": "Meteora",
                "artist": { "id": "Cnv_K6i5Ft4y41SxLy", "name": "Linkin Park" },
            },
        }),
    );

    let track: Track = envelope.decode().unwrap();
    assert_eq!(track.name, "Numb");
    assert_eq!(track.track_number, Some(13));
    assert_eq!(track.available_territories.len(), 5);
    let album = track.album.unwrap();
    assert_eq!(album.name, "Meteora");
    assert_eq!(album.artist.unwrap().name, "Linkin Park");
}

#[test]
fn test_envelope_decode_page() {
    let envelope = Envelope::new(
        200,
        json!({
            "data": [{ "id": "a1", "name": "Hybrid Theory" }],
            "paging": { "offset": 0, "limit": 1, "previous": null, "next": "https://api.kkbox.com/v1.1/artists/x/albums?offset=1" },
            "summary": { "total": 12 },
        }),
    );

    let page: Page<Album> = envelope.decode().unwrap();
    assert_eq!(page.data[0].name, "Hybrid Theory");
    assert_eq!(page.summary.total, 12);
    assert!(page.paging.next.is_some());
    assert!(page.paging.previous.is_none());
}

#[test]
fn test_envelope_decode_mismatch() {
    let envelope = Envelope::new(404, json!({ "error": { "message": "Not found" } }));
    assert!(matches!(
        envelope.decode::<Track>(),
        Err(KkboxError::Decode(_))
    ));
}
