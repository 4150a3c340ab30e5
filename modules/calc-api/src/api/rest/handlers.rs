//! REST handlers for the calculator API.

use axum::Json;
use tracing::debug;

use calc_core::{evaluate, Operation};

use crate::api::problem::Problem;

use super::dto::{CalculateRequest, CalculateResponse, HealthResponse, OperationsResponse};
use super::error::ApiError;
use super::openapi::ApiDoc;

/// Handler for `POST /calculate`.
///
/// Validates the operation key and coerces both operands before touching
/// the arithmetic core; a zero divisor comes back as a 400 problem rather
/// than a server fault.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Evaluation result", body = CalculateResponse),
        (status = 400, description = "Invalid operation, invalid operand, or division by zero", body = Problem),
        (status = 500, description = "Unexpected server fault", body = Problem),
    )
)]
pub async fn calculate(
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, Problem> {
    let operation: Operation = req
        .operation
        .parse()
        .map_err(|_| ApiError::InvalidOperation(req.operation.clone()))?;
    let num1 = req.num1.resolve("num1")?;
    let num2 = req.num2.resolve("num2")?;

    let result = evaluate(operation, num1, num2).map_err(ApiError::from)?;
    debug!(%operation, num1, num2, result, "calculation served");

    Ok(Json(CalculateResponse {
        result,
        operation,
        num1,
        num2,
    }))
}

/// Handler for `GET /api/operations`.
#[utoipa::path(
    get,
    path = "/api/operations",
    tag = "calculator",
    responses(
        (status = 200, description = "Supported operations", body = OperationsResponse),
    )
)]
pub async fn operations() -> Json<OperationsResponse> {
    Json(OperationsResponse::catalog())
}

/// Handler for `GET /health`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for `GET /api/openapi.json`.
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(ApiDoc::openapi())
}
