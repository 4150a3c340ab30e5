//! Boundary error taxonomy and its mapping to RFC 9457 problems.

use http::StatusCode;
use thiserror::Error;

use calc_core::CalcError;

use crate::api::problem::Problem;

/// Everything the HTTP boundary can report to a caller.
///
/// The first three variants are client errors (bad input), `Internal` is a
/// server fault signaling a defect rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid operation: {0:?}")]
    InvalidOperation(String),

    #[error("Invalid value for {field}: {value:?} is not a number")]
    InvalidOperand { field: &'static str, value: String },

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Machine-readable error code carried in the problem body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidOperation(_) => "calc.invalid_operation",
            ApiError::InvalidOperand { .. } => "calc.invalid_operand",
            ApiError::DivisionByZero => "calc.division_by_zero",
            ApiError::Internal(_) => "calc.internal",
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Build the problem response, tagging it with the request path.
    pub fn into_problem(self, instance: &str) -> Problem {
        let title = match &self {
            ApiError::InvalidOperation(_) => "Invalid Operation",
            ApiError::InvalidOperand { .. } => "Invalid Operand",
            ApiError::DivisionByZero => "Division By Zero",
            ApiError::Internal(_) => "Internal Server Error",
        };
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "internal error while serving request");
        }
        Problem::new(self.status(), title, self.to_string())
            .with_code(self.code())
            .with_instance(instance)
    }
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        match e {
            CalcError::DivisionByZero => ApiError::DivisionByZero,
        }
    }
}

/// Implement `From<ApiError>` for Problem so `?` works in handlers.
impl From<ApiError> for Problem {
    fn from(e: ApiError) -> Self {
        e.into_problem("/calculate")
    }
}
