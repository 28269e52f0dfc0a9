use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, SearchResult},
    store::MAX_DESCRIPTION_LEN,
};

pub struct TmdbClient {
    client: wreq::Client,
    api_key: String,
    base_url: String,
    image_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(
        client: wreq::Client,
        api_key: String,
        base_url: String,
        image_url: String,
        rps: u32,
    ) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("TMDB_API_KEY is not set; movie lookups will fail");
        }

        let quota = Quota::per_second(NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN));
        let limiter = Arc::new(RateLimiter::direct(quota));
        Self { client, api_key, base_url, image_url, limiter }
    }

    pub async fn search(&self, title: &str) -> AppResult<Vec<SearchResult>> {
        self.ensure_key()?;
        self.limiter.until_ready().await;

        debug!(query = %title, "searching TMDB");
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %title, results = resp.results.len(), "TMDB search finished");
        Ok(resp.results)
    }

    pub async fn fetch_details(&self, tmdb_id: i64) -> AppResult<MovieDetails> {
        self.ensure_key()?;
        self.limiter.until_ready().await;

        debug!(tmdb_id, "fetching TMDB movie details");
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let resp: DetailsResponse = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        resp.into_details(tmdb_id, &self.image_url)
    }

    fn ensure_key(&self) -> AppResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Lookup("TMDB API key is not configured".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
}

impl DetailsResponse {
    fn into_details(self, tmdb_id: i64, image_url: &str) -> AppResult<MovieDetails> {
        let missing = |field: &str| {
            AppError::Lookup(format!("TMDB response for movie {tmdb_id} has no {field}"))
        };

        let title =
            self.title.filter(|t| !t.trim().is_empty()).ok_or_else(|| missing("title"))?;
        let release_date = self.release_date.ok_or_else(|| missing("release_date"))?;
        let year = parse_year(&release_date).ok_or_else(|| {
            AppError::Lookup(format!(
                "TMDB release_date {release_date:?} for movie {tmdb_id} has no year"
            ))
        })?;
        let overview = self.overview.ok_or_else(|| missing("overview"))?;
        let poster_path = self
            .poster_path
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| missing("poster_path"))?;

        Ok(MovieDetails {
            title,
            year,
            description: truncate_chars(&overview, MAX_DESCRIPTION_LEN),
            img_url: format!("{image_url}{poster_path}"),
        })
    }
}

/// Year from a `YYYY` or `YYYY-MM-DD` date.
fn parse_year(release_date: &str) -> Option<i32> {
    let prefix = release_date.split('-').next()?;
    if prefix.len() != 4 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
