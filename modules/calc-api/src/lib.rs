//! HTTP boundary for the calculator service.
//!
//! Exposes the arithmetic core over a JSON API (`POST /calculate`,
//! `GET /api/operations`, `GET /health`) and an HTML form page at `/`.
//! All operand and operation validation happens here, before the core is
//! invoked; the core only ever signals division by zero.

pub mod api;

pub use api::problem::Problem;
pub use api::rest::routes::router;
