//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::shared::request_id::RequestId;

/// Domain model errors raised while constructing registry values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid address '{0}' (must be 0x followed by 40 hex characters)")]
    InvalidAddress(String),

    #[error("Invalid chain id '{0}'")]
    InvalidChainId(String),
}

/// Lookup failures, one per key level, in precedence order
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid contract name: {0}")]
    UnknownContractKind(String),

    #[error("No contract registry found for domain: {0}")]
    UnknownEnvironment(String),

    #[error("No contracts found for chainId: {0}")]
    UnknownNetwork(u64),

    #[error("No contract found for name: {name}")]
    ContractNotDeployed { name: String, chain_id: u64 },
}

/// Repository-level errors for artifact access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        Self::Mapping(err.to_string())
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Lookup(LookupError::UnknownContractKind(_)) => StatusCode::BAD_REQUEST,
            Self::Lookup(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Lookup(LookupError::UnknownContractKind(_)) => "INVALID_CONTRACT_NAME",
            Self::Lookup(LookupError::UnknownEnvironment(_)) => "DOMAIN_NOT_FOUND",
            Self::Lookup(LookupError::UnknownNetwork(_)) => "CHAIN_NOT_FOUND",
            Self::Lookup(LookupError::ContractNotDeployed { .. }) => "CONTRACT_NOT_DEPLOYED",
            Self::Conflict(_) => "CONFLICT",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError::UseCase(err.into())
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => {
                if let UseCaseError::Repository(err) = uc_error {
                    tracing::error!(error = %err, "Repository failure while serving request");
                }
                let message = match uc_error {
                    UseCaseError::Repository(_) => "An unexpected error occurred".to_string(),
                    other => other.to_string(),
                };
                (uc_error.status_code(), uc_error.error_code().to_string(), message)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone())
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            request_id: RequestId::current().map(|id| id.as_str().to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
