//! Application error type and its HTTP mapping.
//!
//! Callers never see why a page failed to load: every database failure
//! collapses to the same opaque `500` response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Message returned to clients whenever a page cannot be assembled.
pub const DASHBOARD_UNAVAILABLE: &str = "Unable to load dashboard data";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request parameters were rejected before any query ran.
    #[error("{0}")]
    BadRequest(String),

    /// One of a page's queries failed; the failure has already been logged.
    #[error("{}", DASHBOARD_UNAVAILABLE)]
    DashboardUnavailable,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::DashboardUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, DASHBOARD_UNAVAILABLE).into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Unhandled database error");
                (StatusCode::INTERNAL_SERVER_ERROR, DASHBOARD_UNAVAILABLE).into_response()
            }
        }
    }
}
