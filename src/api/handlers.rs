//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_severance;
use crate::error::EngineResult;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/parameters", get(parameters_handler))
        .with_state(state)
}

/// Handler for GET /parameters.
///
/// Returns the statutory parameters the calculator is running with.
async fn parameters_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.config().clone()))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the severance breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if request.months_worked.is_some() == request.employment_period.is_some() {
        warn!(
            correlation_id = %correlation_id,
            "Request must carry exactly one of months_worked or employment_period"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(
                "provide exactly one of months_worked or employment_period",
            )),
        )
            .into_response();
    }

    let start_time = Instant::now();
    match perform_calculation(request, &state) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                calculation_id = %response.calculation_id,
                termination_type = %response.termination_type,
                total = %response.rounded.total,
                warnings = response.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the engine for a request and wraps the result for the wire.
fn perform_calculation(
    request: CalculationRequest,
    state: &AppState,
) -> EngineResult<CalculationResponse> {
    let input = request.to_input()?;
    let calculation = calculate_severance(&input, state.config())?;

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        hourly_rate: calculation.hourly_rate,
        months_worked: calculation.input.months_worked,
        termination_type: calculation.input.termination_type,
        rounded: calculation.result.rounded_to_cents(),
        result: calculation.result,
        audit_trace: calculation.audit_trace,
        practice: request.practice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            base_salary: dec("5450"),
            overtime_hours_50: Decimal::ZERO,
            overtime_hours_100: Decimal::ZERO,
            months_worked: Some(dec("12")),
            employment_period: None,
            termination_type: Some("without_cause".to_string()),
            practice: None,
        }
    }

    async fn post_json(body: String) -> axum::response::Response {
        create_router(AppState::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = post_json(body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.rounded.total, dec("20041.47"));
        assert_eq!(result.result.severance_fund_contribution, dec("7324.8"));
        assert_eq!(result.audit_trace.steps.len(), 6);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_negative_salary_returns_invalid_input() {
        let mut request = create_valid_request();
        request.base_salary = dec("-100");
        let response = post_json(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.details.as_deref(), Some("base_salary"));
    }

    #[tokio::test]
    async fn test_missing_months_returns_validation_error() {
        let mut request = create_valid_request();
        request.months_worked = None;
        let response = post_json(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = create_router(AppState::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_overflow_returns_422() {
        let mut request = create_valid_request();
        request.base_salary = Decimal::MAX;
        request.overtime_hours_50 = dec("1000");
        let response = post_json(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CALCULATION_ERROR");
        assert!(error.details.unwrap().contains("overtime"));
    }

    #[tokio::test]
    async fn test_parameters_endpoint_returns_statutory_set() {
        let response = create_router(AppState::default())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/parameters")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["regime"]["code"], "CLT");
        assert_eq!(json["parameters"]["monthly_hour_base"], "220");
        assert_eq!(
            json["parameters"]["severance_fund"]["without_cause_multiplier"],
            "1.4"
        );
    }
}
