//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoints for calculating severance
//! breakdowns and inspecting the statutory parameters in force.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PracticeProfile};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
