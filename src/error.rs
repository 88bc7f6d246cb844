use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::config::Environment;
use crate::github::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("GithubClient not initialized")]
    ClientNotInitialized,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ClientNotInitialized => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(e) => e
                .status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::ClientNotInitialized => "configuration",
            AppError::BadRequest(_) => "validation",
            AppError::Upstream(_) => "upstream",
        }
    }

    /// Attach the running environment so the response knows how much to reveal.
    pub fn report(self, environment: Environment) -> ErrorReport {
        ErrorReport {
            error: self,
            environment,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// `{ kind, status, detail }` outside production, `{}` in production
    #[schema(value_type = Object)]
    pub error: Value,
}

/// An [`AppError`] ready to be written as `{ message, error }`.
#[derive(Debug)]
pub struct ErrorReport {
    pub error: AppError,
    pub environment: Environment,
}

impl IntoResponse for ErrorReport {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = self.error.to_string();

        tracing::error!(status = %status, kind = self.error.kind(), error = %message);

        let error = if self.environment.exposes_error_detail() {
            json!({
                "kind": self.error.kind(),
                "status": status.as_u16(),
                "detail": message,
            })
        } else {
            json!({})
        };

        let body = ErrorBody { message, error };

        (status, axum::Json(body)).into_response()
    }
}
