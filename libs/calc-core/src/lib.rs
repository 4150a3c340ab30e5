//! Arithmetic core for the calculator service.
//!
//! Five pure functions over `f64` operands plus the [`Operation`] selector
//! and its static catalog. Every boundary (JSON API, HTML form, REPL)
//! collects two operands and an operation, calls [`evaluate`], and renders
//! the result or the [`CalcError`].

pub mod arithmetic;
pub mod error;
pub mod operation;

pub use arithmetic::{add, divide, evaluate, multiply, power, subtract};
pub use error::CalcError;
pub use operation::{Operation, OperationInfo, UnknownOperation};
