//! Typed failures the arithmetic core can signal.

use thiserror::Error;

/// Failure produced by [`crate::evaluate`].
///
/// Only division can fail; `power` follows native `f64::powf` semantics and
/// returns whatever the float produces (including NaN for a negative base
/// with a fractional exponent).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Second operand of a division was exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
