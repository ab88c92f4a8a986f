//! Failures a lookup handler can answer with, and how each is rendered.

use crate::db::StoreError;
use crate::http::response::{json_response, ErrorResponse};
use crate::query::ValidationError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required parameter missing or not coercible → 400.
    #[error("{0}")]
    Validation(String),

    /// Single-record lookup matched nothing → 404.
    #[error("{0}")]
    NotFound(&'static str),

    /// Store connection, query or decode failure → 500.
    /// `what` names the thing being fetched, e.g. `"players"`.
    #[error("Error {} {}", verb(.source), .what)]
    Store {
        what: &'static str,
        #[source]
        source: StoreError,
    },
}

fn verb(err: &StoreError) -> &'static str {
    match err {
        StoreError::Query(_) => "fetching",
        StoreError::Decode(_) => "decoding",
    }
}

impl ApiError {
    /// Adapter for `map_err` at store call sites.
    pub fn store(what: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { what, source }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0.to_owned())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store { source, .. } = self {
            log::error!("{self}: {source}");
        }
        json_response(
            self.status_code(),
            &ErrorResponse {
                error: self.to_string(),
            },
        )
    }
}
