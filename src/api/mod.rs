//! HTTP API module for the shift roster engine.
//!
//! This module exposes the model builder and the roster decoder over REST:
//! `GET /model` and `POST /model` return models ready for the solver, and
//! `POST /roster` decodes a solver sample set into a roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ModelRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
