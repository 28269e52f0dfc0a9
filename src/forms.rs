use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::ReviewUpdate,
};

pub const MAX_REVIEW_LEN: usize = 250;
pub const MAX_RATING: f64 = 10.0;

/// `?id=` for routes addressing a stored movie.
#[derive(Debug, Default, Deserialize)]
pub struct MovieIdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl MovieIdQuery {
    /// A missing or unparseable id can never match a row, so it is reported as not found.
    pub fn movie_id(&self) -> AppResult<i32> {
        let raw = self.id.as_deref().map(str::trim).unwrap_or_default();
        raw.parse().map_err(|_| AppError::NotFound(raw.to_string()))
    }
}

/// `?id=` carrying the movie database's identifier.
#[derive(Debug, Default, Deserialize)]
pub struct ExternalIdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl ExternalIdQuery {
    pub fn external_id(&self) -> AppResult<i64> {
        let Some(raw) = self.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Err(AppError::Validation("pick a movie from the search results".into()));
        };
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AppError::Validation(format!("\"{raw}\" is not a valid movie id"))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddMovieForm {
    #[serde(default)]
    pub title: String,
}

impl AddMovieForm {
    pub fn validate(&self) -> AppResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("movie title is required".into()));
        }
        Ok(title.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

impl ReviewForm {
    pub fn validate(&self) -> AppResult<ReviewUpdate> {
        let raw = self.rating.trim();
        if raw.is_empty() {
            return Err(AppError::Validation("rating is required".into()));
        }
        let rating: f64 = raw
            .parse()
            .map_err(|_| AppError::Validation(format!("rating \"{raw}\" is not a number")))?;
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(AppError::Validation(format!(
                "rating must be between 0 and {MAX_RATING}"
            )));
        }

        let review = self.review.trim();
        if review.chars().count() > MAX_REVIEW_LEN {
            return Err(AppError::Validation(format!(
                "review must be at most {MAX_REVIEW_LEN} characters"
            )));
        }

        Ok(ReviewUpdate {
            rating,
            review: (!review.is_empty()).then(|| review.to_string()),
        })
    }
}
