//! Response helpers.
//!
//! # Responsibilities
//! - Map ledger errors to HTTP status codes
//! - Render error bodies as `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::ledger::LedgerError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl LedgerError {
    pub fn status(&self) -> StatusCode {
        match self {
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::IncorrectArguments { .. } => StatusCode::BAD_REQUEST,
            LedgerError::Snapshot(_) | LedgerError::SnapshotFormat(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}
