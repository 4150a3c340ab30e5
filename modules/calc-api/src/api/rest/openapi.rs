//! OpenAPI document for the calculator API.

use utoipa::OpenApi;

use crate::api::problem::Problem;

use super::dto::{CalculateRequest, CalculateResponse, HealthResponse, OperationDto, OperationsResponse};
use super::handlers;

/// The generated OpenAPI document, served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Five binary arithmetic operations over a JSON API"
    ),
    paths(handlers::calculate, handlers::operations, handlers::health),
    components(schemas(
        CalculateRequest,
        CalculateResponse,
        OperationDto,
        OperationsResponse,
        HealthResponse,
        Problem
    ))
)]
pub struct ApiDoc;
