use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input the user has to correct before retrying.
    #[error("{0}")]
    Validation(String),

    #[error("\"{0}\" is already on your list")]
    DuplicateTitle(String),

    #[error("no movie with id {0}")]
    NotFound(String),

    /// The movie database was unreachable or answered with incomplete data.
    #[error("movie lookup failed: {0}")]
    Lookup(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<wreq::Error> for AppError {
    /// The request uri carries the API key, so it is stripped before the
    /// message can reach a page or a log line.
    fn from(err: wreq::Error) -> Self {
        Self::Lookup(err.without_uri().to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateTitle(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Lookup(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (heading, message) = match &self {
            AppError::Validation(msg) => ("Invalid input", msg.clone()),
            AppError::DuplicateTitle(_) => ("Already added", self.to_string()),
            AppError::NotFound(_) => ("Not found", self.to_string()),
            AppError::Lookup(_) => {
                tracing::warn!(error = %self, "movie lookup failed");
                ("Lookup failed", format!("{self}. Please try again in a moment."))
            },
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                ("Error", "An internal error occurred".to_string())
            },
        };

        let body = crate::templates::error_page(heading, &message);
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
