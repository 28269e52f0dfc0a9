#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::json;
use topmovies::{
    AppState,
    config::Config,
    db,
    models::NewMovie,
    store::MovieStore,
    tmdb::TmdbClient,
};

pub const API_KEY: &str = "test-key";
pub const IMAGE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Nothing listens on the discard port, so every request fails to connect.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub async fn store() -> MovieStore {
    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    MovieStore::new(db)
}

pub fn tmdb(base_url: &str) -> TmdbClient {
    tmdb_with_key(base_url, API_KEY)
}

pub fn tmdb_with_key(base_url: &str, api_key: &str) -> TmdbClient {
    let http = wreq::Client::builder().build().unwrap();
    TmdbClient::new(http, api_key.to_string(), base_url.to_string(), IMAGE_URL.to_string(), 100)
}

pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        tmdb_api_key: API_KEY.to_string(),
        tmdb_base_url: UNREACHABLE_URL.to_string(),
        tmdb_image_url: IMAGE_URL.to_string(),
        tmdb_rps: 100,
        http_timeout_secs: 5,
        database_url: "sqlite::memory:".to_string(),
    }
}

pub fn app(store: MovieStore, tmdb: TmdbClient) -> Router {
    let state = AppState { config: Arc::new(test_config()), store, tmdb: Arc::new(tmdb) };
    topmovies::router(Arc::new(state))
}

pub fn new_movie(title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year: 2010,
        description: format!("{title} description"),
        img_url: format!("{IMAGE_URL}/{}.jpg", title.to_lowercase()),
    }
}

pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn form_body(body: &str) -> Body {
    Body::from(body.to_string())
}

/// Serves a minimal imitation of the TMDB search and detail endpoints on a
/// random local port and returns its base url.
pub async fn spawn_tmdb_stub() -> String {
    let app = Router::new()
        .route("/search/movie", get(stub_search))
        .route("/movie/{id}", get(stub_details));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stub_search(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("api_key").map(String::as_str) != Some(API_KEY) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match params.get("query").map(String::as_str) {
        Some("Inception") => Json(json!({
            "page": 1,
            "results": [{ "id": 27205, "title": "Inception", "release_date": "2010-07-15" }],
        }))
        .into_response(),
        Some("explode") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({ "page": 1, "results": [] })).into_response(),
    }
}

async fn stub_details(
    Path(id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("api_key").map(String::as_str) != Some(API_KEY)
        || params.get("language").map(String::as_str) != Some("en-US")
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match id {
        27205 => Json(json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "overview": "A thief who steals corporate secrets through dream-sharing.",
            "poster_path": "/abc.jpg",
        }))
        .into_response(),
        13 => Json(json!({
            "id": 13,
            "title": "Forrest Gump",
            "release_date": "1994-06-23",
            "overview": "Life is like a box of chocolates.",
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
