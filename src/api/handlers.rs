//! HTTP request handlers for the shift roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Scenario;
use crate::error::SchedulerResult;
use crate::formulation::build_scenario_model;
use crate::models::{RosterResult, SampleSet, ShiftEntry};
use crate::solver::decode_first_feasible;

use super::request::ModelRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/model", get(scenario_model_handler).post(model_handler))
        .route("/roster", post(roster_handler))
        .with_state(state)
}

/// Handler for GET /model.
///
/// Returns the model built from the loaded scenario.
async fn scenario_model_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Building model for loaded scenario");

    match build_scenario_model(state.config().scenario()) {
        Ok(model) => json_response(StatusCode::OK, &model),
        Err(err) => error_response(correlation_id, err.into()),
    }
}

/// Handler for POST /model.
///
/// Builds the model for the scenario in the request body.
async fn model_handler(payload: Result<Json<ModelRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing model request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let scenario: Scenario = request.into();
    match build_scenario_model(&scenario) {
        Ok(model) => {
            info!(
                correlation_id = %correlation_id,
                scenario = %scenario.metadata().name,
                variables = model.variable_count(),
                constraints = model.constraint_count(),
                "Model request completed"
            );
            json_response(StatusCode::OK, &model)
        }
        Err(err) => error_response(correlation_id, err.into()),
    }
}

/// Handler for POST /roster.
///
/// Accepts the solver's sample set for the loaded scenario, picks the first
/// feasible sample and returns the decoded roster.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<SampleSet>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    let samples = match payload {
        Ok(Json(samples)) => samples,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_roster(state.config().scenario(), &samples) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %result.run_id,
                samples = samples.len(),
                total_cost = result.total_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Roster request completed"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => error_response(correlation_id, err.into()),
    }
}

/// Decodes the first feasible sample into a [`RosterResult`].
fn build_roster(scenario: &Scenario, samples: &SampleSet) -> SchedulerResult<RosterResult> {
    let model = build_scenario_model(scenario)?;
    let outcome = decode_first_feasible(&model, samples)?;

    let shifts = outcome
        .roster
        .iter()
        .map(|(index, employees)| ShiftEntry {
            index,
            label: scenario.rules().shift_label(index),
            employees: employees.iter().cloned().collect(),
        })
        .collect();

    Ok(RosterResult {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scenario: scenario.metadata().name.clone(),
        shifts,
        total_cost: outcome.evaluation.energy,
        violations: outcome.evaluation.violations,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, api_error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request failed"
    );
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
