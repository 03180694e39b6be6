#![allow(dead_code)]

use kkbox_sdk::kkbox::HttpClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn http(server: &MockServer) -> HttpClient {
    HttpClient::with_base_url(TOKEN, server.uri())
}

// Helper function to create a list response with an optional next cursor
pub fn page(items: Vec<Value>, next: Option<String>) -> Value {
    let total = items.len();
    json!({
        "data": items,
        "paging": {
            "offset": 0,
            "limit": total,
            "previous": null,
            "next": next,
        },
        "summary": { "total": total },
    })
}

pub fn artist(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "url": format!("https://www.kkbox.com/tw/tc/artist/{}", id) })
}

pub fn album(id: &str, name: &str, artist_name: &str, territories: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "explicitness": false,
        "available_territories": territories,
        "release_date": "2017-05-19",
        "artist": artist(&format!("{}-artist", id), artist_name),
    })
}

pub fn track(id: &str, name: &str, album_name: &str, artist_name: &str, territories: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration": 215000,
        "track_number": 1,
        "explicitness": false,
        "available_territories": territories,
        "album": album(&format!("{}-album", id), album_name, artist_name, territories),
    })
}

pub fn playlist(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "owner": { "id": "owner", "name": "KKBOX" },
    })
}
