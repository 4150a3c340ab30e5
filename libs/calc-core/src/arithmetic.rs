//! The five arithmetic operations and the dispatcher.
//!
//! All functions are pure: no shared state, no I/O, safe to call from any
//! number of concurrent requests.

use tracing::debug;

use crate::error::CalcError;
use crate::operation::Operation;

/// Add two numbers.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract the second number from the first.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide the first number by the second.
///
/// The divisor is checked against exact zero before the quotient is
/// computed, so a zero divisor never produces an infinite or NaN result.
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise the first number to the power of the second.
///
/// Native `f64::powf` semantics: fractional and negative exponents are
/// supported, and a negative base with a fractional exponent yields NaN,
/// returned as-is rather than signaled as an error.
#[must_use]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Evaluate one binary operation.
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] for [`Operation::Divide`] with a
/// zero second operand; every other operation is infallible.
pub fn evaluate(op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
    debug!(%op, a, b, "evaluating operation");
    match op {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
        Operation::Power => Ok(power(a, b)),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn add_concrete_cases() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-10.0, 5.0), -5.0);
        assert!((add(0.1, 0.2) - 0.3).abs() < EPS);
    }

    #[test]
    fn add_is_commutative() {
        for (a, b) in [(1.5, 2.5), (-7.0, 3.25), (0.0, -0.0), (1e10, 1e-10)] {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn subtract_concrete_cases() {
        assert_eq!(subtract(5.0, 5.0), 0.0);
        assert_eq!(subtract(-10.0, 5.0), -15.0);
    }

    #[test]
    fn subtract_is_antisymmetric() {
        for (a, b) in [(1.5, 2.5), (-7.0, 3.25), (10.0, -4.0)] {
            assert_eq!(subtract(a, b), -subtract(b, a));
        }
    }

    #[test]
    fn multiply_concrete_cases() {
        assert_eq!(multiply(5.0, 0.0), 0.0);
        assert_eq!(multiply(-10.0, 5.0), -50.0);
    }

    #[test]
    fn divide_concrete_cases() {
        assert_eq!(divide(7.0, 3.0).unwrap(), 2.333_333_333_333_333_5);
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn divide_by_zero_is_signaled() {
        for a in [5.0, 0.0, -3.25, f64::MAX] {
            assert_eq!(divide(a, 0.0), Err(CalcError::DivisionByZero));
        }
        // negative zero is still exactly zero
        assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_then_multiply_restores_dividend() {
        for (a, b) in [(7.0, 3.0), (-12.5, 0.4), (1e8, 7.0)] {
            let q = divide(a, b).unwrap();
            assert!((multiply(q, b) - a).abs() < EPS * a.abs().max(1.0));
        }
    }

    #[test]
    fn power_concrete_cases() {
        assert_eq!(power(2.0, 3.0), 8.0);
        assert_eq!(power(-3.0, 3.0), -27.0);
        assert!((power(4.0, 0.5) - 2.0).abs() < EPS);
    }

    #[test]
    fn power_zero_exponent_is_one() {
        for a in [2.0, -3.5, 1e12, 0.0] {
            assert_eq!(power(a, 0.0), 1.0);
        }
    }

    #[test]
    fn power_follows_native_float_semantics() {
        // negative base, fractional exponent: NaN, not an error
        assert!(power(-4.0, 0.5).is_nan());
        // zero base, negative exponent: infinity, not an error
        assert_eq!(power(0.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn evaluate_dispatches_all_operations() {
        assert_eq!(evaluate(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(evaluate(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(evaluate(Operation::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(evaluate(Operation::Divide, 6.0, 3.0), Ok(2.0));
        assert_eq!(evaluate(Operation::Power, 2.0, 3.0), Ok(8.0));
    }

    #[test]
    fn evaluate_surfaces_division_by_zero() {
        assert_eq!(
            evaluate(Operation::Divide, 5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }
}
