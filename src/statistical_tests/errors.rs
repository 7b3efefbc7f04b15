//! statistical_tests::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the trimmed Spearman
//! independence test and its building blocks (trimming functions, φ
//! contrasts, quadrature options), together with a conversion layer to
//! Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TSResult`] and [`TSError`] as the canonical result and error
//!   types for every fallible constructor in `statistical_tests` and
//!   `numerics`.
//! - Classify every variant into one of two kinds via [`TSError::kind`]:
//!   caller-side [`TSErrorKind::InvalidArgument`] or
//!   [`TSErrorKind::NumericalInstability`] raised by the φ integrals.
//! - Implement `From<TSError> for PyErr` so Python callers see a
//!   `ValueError` carrying the Rust `Display` message.
//!
//! Invariants & assumptions
//! ------------------------
//! - Invalid-argument variants are only produced synchronously by
//!   constructors or by `evaluate` shape checks; they are never retried.
//! - `NumericalInstability` is only produced by
//!   [`PhiFunc`](crate::statistical_tests::trimmed_spearman::PhiFunc)
//!   construction when `m` or `c` is non-finite.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints
//!   ("0 ≤ mu ≤ 1", "tau_min < tau_max") rather than low-level details.
//! - Payloads carry the offending parameter name and value only.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in `Display` messages and the
//!   kind classification. The PyO3 conversion is exercised from Python.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TSResult<T> = Result<T, TSError>;

/// Coarse classification of [`TSError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TSErrorKind {
    InvalidArgument,
    NumericalInstability,
}

/// TSError — error conditions for the trimmed Spearman independence test.
///
/// Variants
/// --------
/// - `InvalidArgument { name, value, reason }`
///   A scalar parameter (`mu`, `lambda`, `delta`, `tau_min`, `tau_max`,
///   `q`, degrees of freedom) violates its domain constraint.
/// - `LengthMismatch { len_u1, len_u2 }`
///   The two residual sequences have different lengths.
/// - `EmptySample`
///   A correlation was requested on zero paired observations.
/// - `NumericalInstability { quantity, value, mu, lambda, delta }`
///   The centering constant `m` or the scale `c` of a φ contrast came out
///   non-finite; `delta` is likely too small relative to `lambda − mu`.
/// - `InvalidQuadratureOption { name, value, reason }`
///   A quadrature tolerance or interval limit is out of range.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it can
///   be propagated with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum TSError {
    //------ Input validation errors ------
    InvalidArgument { name: &'static str, value: f64, reason: &'static str },
    LengthMismatch { len_u1: usize, len_u2: usize },
    EmptySample,
    InvalidQuadratureOption { name: &'static str, value: f64, reason: &'static str },

    //------ Numerical errors ------
    NumericalInstability { quantity: &'static str, value: f64, mu: f64, lambda: f64, delta: f64 },
}

impl TSError {
    /// Map the variant onto the two error kinds exposed to callers.
    pub fn kind(&self) -> TSErrorKind {
        match self {
            TSError::NumericalInstability { .. } => TSErrorKind::NumericalInstability,
            _ => TSErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == TSErrorKind::InvalidArgument
    }
}

impl std::error::Error for TSError {}

impl std::fmt::Display for TSError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TSError::InvalidArgument { name, value, reason } => {
                write!(f, "Invalid argument {name} = {value}: {reason}")
            }
            TSError::LengthMismatch { len_u1, len_u2 } => write!(
                f,
                "Residual sequences must have equal length (got {len_u1} and {len_u2})."
            ),
            TSError::EmptySample => {
                write!(f, "Need at least 1 paired observation to estimate a correlation.")
            }
            TSError::InvalidQuadratureOption { name, value, reason } => {
                write!(f, "Invalid quadrature option {name} = {value}: {reason}")
            }
            TSError::NumericalInstability { quantity, value, mu, lambda, delta } => write!(
                f,
                "Non-finite {quantity} = {value} for trimming interval [{mu}, {lambda}]; \
                 delta = {delta} is likely too small relative to lambda - mu = {}.",
                lambda - mu
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TSError> for PyErr {
    fn from(err: TSError) -> PyErr {
        PyValueError::new_err(format!("TSError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` messages.
    // - Classification of variants via `TSError::kind`.
    //
    // They intentionally DO NOT cover:
    // - The `From<TSError> for PyErr` conversion, which needs the Python
    //   C API and is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidArgument` names the offending parameter and value.
    //
    // Given
    // -----
    // - An `InvalidArgument` for `mu = 1.5`.
    //
    // Expect
    // ------
    // - The message contains both "mu" and "1.5".
    fn ts_error_invalid_argument_includes_name_and_value() {
        // Arrange
        let err = TSError::InvalidArgument { name: "mu", value: 1.5, reason: "must satisfy 0 ≤ mu ≤ 1" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("mu"), "Display should name the parameter.\nGot: {msg}");
        assert!(msg.contains("1.5"), "Display should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `LengthMismatch` reports both sequence lengths.
    //
    // Given
    // -----
    // - Lengths 10 and 11.
    //
    // Expect
    // ------
    // - The message contains "10" and "11".
    fn ts_error_length_mismatch_includes_both_lengths() {
        // Arrange
        let err = TSError::LengthMismatch { len_u1: 10, len_u2: 11 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("10") && msg.contains("11"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the numerical-instability message points at delta.
    //
    // Given
    // -----
    // - A `NumericalInstability` on `c` with delta = 1e-300.
    //
    // Expect
    // ------
    // - The message mentions "delta" and "too small".
    fn ts_error_numerical_instability_mentions_delta() {
        // Arrange
        let err = TSError::NumericalInstability {
            quantity: "c",
            value: f64::INFINITY,
            mu: 0.2,
            lambda: 0.4,
            delta: 1e-300,
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("delta") && msg.contains("too small"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check that every variant except `NumericalInstability` is classified
    // as an invalid-argument error.
    //
    // Given
    // -----
    // - One value of each variant.
    //
    // Expect
    // ------
    // - `kind()` matches the documented classification.
    fn ts_error_kind_classifies_variants() {
        let invalid = [
            TSError::InvalidArgument { name: "q", value: 0.0, reason: "q must be positive" },
            TSError::LengthMismatch { len_u1: 1, len_u2: 2 },
            TSError::EmptySample,
            TSError::InvalidQuadratureOption { name: "limit", value: 0.0, reason: "positive" },
        ];
        for err in &invalid {
            assert_eq!(err.kind(), TSErrorKind::InvalidArgument, "{err:?}");
            assert!(err.is_invalid_argument());
        }

        let unstable = TSError::NumericalInstability {
            quantity: "m",
            value: f64::NAN,
            mu: 0.0,
            lambda: 1.0,
            delta: 0.0,
        };
        assert_eq!(unstable.kind(), TSErrorKind::NumericalInstability);
        assert!(!unstable.is_invalid_argument());
    }
}
