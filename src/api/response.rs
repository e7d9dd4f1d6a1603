//! Response types for the shift roster API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, Stage};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Stage of the run that failed, when the error comes from the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            stage: None,
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    fn at_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SchedulerError> for ApiErrorResponse {
    fn from(error: SchedulerError) -> Self {
        let stage = error.stage();
        let message = error.to_string();
        let (status, error) = match error {
            SchedulerError::ConfigNotFound { .. } | SchedulerError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            SchedulerError::InvalidScenario { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_SCENARIO",
                    message,
                    "The scenario violates a precondition of the model builder",
                ),
            ),
            SchedulerError::UnknownEmployee { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_EMPLOYEE",
                    message,
                    "Every employee named by a rule needs a preference vector",
                ),
            ),
            SchedulerError::SolverFailed { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("SOLVER_FAILED", message),
            ),
            SchedulerError::NoFeasibleSolution { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "NO_FEASIBLE_SOLUTION",
                    message,
                    "None of the submitted samples is flagged feasible",
                ),
            ),
            SchedulerError::InvalidVariableLabel { .. }
            | SchedulerError::NonBinaryValue { .. }
            | SchedulerError::ShiftOutOfRange { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "MALFORMED_ASSIGNMENT",
                    message,
                    "The chosen sample does not decode into a roster",
                ),
            ),
        };

        ApiErrorResponse {
            status,
            error: error.at_stage(stage),
        }
    }
}
