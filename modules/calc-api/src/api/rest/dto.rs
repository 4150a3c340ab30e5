//! REST DTOs for the calculator API (serde + utoipa).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use calc_core::{Operation, OperationInfo};

use super::error::ApiError;

/// Operand as received on the wire: a JSON number or a numeric string.
///
/// The API accepts both (`3` and `"3"`), matching what HTML-origin clients
/// tend to send. Resolution to `f64` happens in the handler so that parse
/// failures surface as a typed client error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawOperand {
    Number(f64),
    Text(String),
}

impl RawOperand {
    /// Resolve to a float, naming the offending field on failure.
    pub fn resolve(&self, field: &'static str) -> Result<f64, ApiError> {
        match self {
            RawOperand::Number(n) => Ok(*n),
            RawOperand::Text(s) => s.trim().parse::<f64>().map_err(|_| ApiError::InvalidOperand {
                field,
                value: s.clone(),
            }),
        }
    }
}

/// Request to evaluate one binary operation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// Operation key: `add | subtract | multiply | divide | power`
    pub operation: String,
    /// First operand (number, or string coercible to a number)
    #[schema(value_type = f64)]
    pub num1: RawOperand,
    /// Second operand (number, or string coercible to a number)
    #[schema(value_type = f64)]
    pub num2: RawOperand,
}

/// Successful evaluation, echoing back the resolved inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// The computed value
    pub result: f64,
    /// The operation that was applied
    #[schema(value_type = String)]
    pub operation: Operation,
    /// First operand, after coercion
    pub num1: f64,
    /// Second operand, after coercion
    pub num2: f64,
}

/// One entry of the operations catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationDto {
    /// Canonical key (`"add"`)
    pub key: String,
    /// Operator symbol (`"+"`)
    pub symbol: String,
    /// Display name (`"Addition"`)
    pub name: String,
}

impl From<OperationInfo> for OperationDto {
    fn from(info: OperationInfo) -> Self {
        Self {
            key: info.key.to_owned(),
            symbol: info.symbol.to_owned(),
            name: info.name.to_owned(),
        }
    }
}

/// The static operations catalog, for client discovery.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationsResponse {
    pub operations: Vec<OperationDto>,
}

impl OperationsResponse {
    #[must_use]
    pub fn catalog() -> Self {
        Self {
            operations: Operation::catalog().into_iter().map(Into::into).collect(),
        }
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_owned(),
            service: "calc-server".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}
