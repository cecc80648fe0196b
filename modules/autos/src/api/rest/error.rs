use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// RFC 9457 problem details body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Error half of every handler result.
#[derive(Debug)]
pub enum ApiError {
    /// Status line only, empty body (400 for invalid payloads, 204 for misses).
    Status(StatusCode),
    /// `application/problem+json` body.
    Problem(Problem),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Status(status) => status.into_response(),
            ApiError::Problem(problem) => {
                let status = StatusCode::from_u16(problem.status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    [(header::CONTENT_TYPE, "application/problem+json")],
                    Json(problem),
                )
                    .into_response()
            }
        }
    }
}

/// Helper to create a Problem with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ApiError {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    ApiError::Problem(Problem {
        type_url: format!("https://errors.example.com/{}", code),
        title: title.to_string(),
        status: status.as_u16(),
        detail: detail.into(),
        instance: instance.to_string(),
        code: code.to_string(),
        trace_id,
    })
}

/// Map a domain error onto the HTTP contract: invalid input is a bare 400,
/// a VIN miss is a bare 204, everything else gets a problem body.
pub fn map_domain_error(e: &DomainError, instance: &str) -> ApiError {
    match e {
        DomainError::InvalidRequest { reason } => {
            tracing::debug!(reason = %reason, "Rejecting invalid request");
            ApiError::Status(StatusCode::BAD_REQUEST)
        }
        DomainError::AutoNotFound { .. } => ApiError::Status(StatusCode::NO_CONTENT),
        DomainError::VinAlreadyExists { vin } => from_parts(
            StatusCode::CONFLICT,
            "AUTOS_VIN_CONFLICT",
            "VIN already exists",
            format!("An automobile with VIN '{}' is already registered", vin),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
