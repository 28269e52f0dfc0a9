use serde::{Deserialize, Serialize};

/// Fields required to insert a movie. Rating, review and ranking start unset.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

/// Partial update applied by the edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewUpdate {
    pub rating: f64,
    pub review: Option<String>,
}

/// A candidate returned by a title search. Never persisted.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Validated detail record for a single external movie.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

impl From<MovieDetails> for NewMovie {
    fn from(details: MovieDetails) -> Self {
        Self {
            title: details.title,
            year: details.year,
            description: details.description,
            img_url: details.img_url,
        }
    }
}
