pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod forms;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/add-review", get(routes::add_form).post(routes::add_search))
        .route("/find", get(routes::find).post(routes::find))
        .route("/edit-review", get(routes::edit_form).post(routes::edit_submit))
        .route("/delete", get(routes::delete_form).post(routes::delete_submit))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
