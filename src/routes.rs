use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    error::AppResult,
    forms::{AddMovieForm, ExternalIdQuery, MovieIdQuery, ReviewForm},
    ranking, templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut movies = state.store.list_all().await?;
    ranking::assign_rankings(&mut movies);
    state.store.save_ranking(&movies).await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Response> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(err) => {
            return Ok(invalid_form(templates::add_page(&form.title, Some(&err.to_string()))));
        },
    };

    let results = state.tmdb.search(&title).await?;
    Ok(Html(templates::select_page(&title, &results)).into_response())
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ExternalIdQuery>,
) -> AppResult<Redirect> {
    let tmdb_id = q.external_id()?;
    let details = state.tmdb.fetch_details(tmdb_id).await?;
    let movie = state.store.create(details.into()).await?;
    Ok(Redirect::to(&format!("/edit-review?id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.movie_id()?).await?;
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();
    Ok(Html(templates::edit_page(&movie, &rating, &review, None)))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
    Form(form): Form<ReviewForm>,
) -> AppResult<Response> {
    let id = q.movie_id()?;
    let update = match form.validate() {
        Ok(update) => update,
        Err(err) => {
            let movie = state.store.get(id).await?;
            let body =
                templates::edit_page(&movie, &form.rating, &form.review, Some(&err.to_string()));
            return Ok(invalid_form(body));
        },
    };

    state.store.update(id, update).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.movie_id()?).await?;
    Ok(Html(templates::delete_page(&movie)))
}

pub async fn delete_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.movie_id()?).await?;
    Ok(Redirect::to("/"))
}

fn invalid_form(body: String) -> Response {
    (StatusCode::BAD_REQUEST, Html(body)).into_response()
}
