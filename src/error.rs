use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

/// Message returned for every server-side failure. Details stay in the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error.";
pub const NOT_FOUND_MESSAGE: &str = "Part ID not found.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Database(sqlx::Error::RowNotFound) => {
                StatusCode::NOT_FOUND
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(_) | AppError::Database(sqlx::Error::RowNotFound) => {
                debug!(error = %self, "Lookup missed");
                NOT_FOUND_MESSAGE.to_string()
            }
            AppError::Database(err) => {
                error!(error = %err, "Database error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        // &'static str / String bodies render as text/plain; charset=utf-8.
        (status, message).into_response()
    }
}
