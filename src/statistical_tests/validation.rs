//! statistical_tests::validation — shared input guards for the trimmed
//! Spearman test.
//!
//! Purpose
//! -------
//! Centralize the domain checks performed by the constructors of the
//! trimmed Spearman building blocks so that every constructor reports the
//! same [`TSError`] variant for the same violated constraint.
//!
//! Key behaviors
//! -------------
//! - Check interval endpoints (`mu`, `lambda`) against the closed unit
//!   interval and trimming bounds (`tau_min`, `tau_max`) against the open
//!   unit interval.
//! - Check ordering, ramp width, partition count, and paired-sample shape
//!   and finiteness.
//!
//! Invariants & assumptions
//! ------------------------
//! - All range checks are written so that `NaN` fails them.
//! - Guards never allocate and never panic.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each error branch and a success path.

use crate::statistical_tests::errors::{TSError, TSResult};

/// Require `0 ≤ value ≤ 1`.
pub fn validate_closed_unit(name: &'static str, value: f64) -> TSResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(TSError::InvalidArgument { name, value, reason: "must satisfy 0 ≤ value ≤ 1" });
    }
    Ok(())
}

/// Require `0 < value < 1`.
pub fn validate_open_unit(name: &'static str, value: f64) -> TSResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(TSError::InvalidArgument { name, value, reason: "must satisfy 0 < value < 1" });
    }
    Ok(())
}

/// Require `lower < upper`; the lower endpoint is reported on failure.
pub fn validate_ordered(lower_name: &'static str, lower: f64, upper: f64) -> TSResult<()> {
    if !(lower < upper) {
        return Err(TSError::InvalidArgument {
            name: lower_name,
            value: lower,
            reason: "lower bound must be strictly less than upper bound",
        });
    }
    Ok(())
}

/// Require `0 ≤ delta ≤ (lambda − mu) / 2`.
pub fn validate_ramp_width(delta: f64, mu: f64, lambda: f64) -> TSResult<()> {
    if !(delta >= 0.0 && delta <= (lambda - mu) / 2.0) {
        return Err(TSError::InvalidArgument {
            name: "delta",
            value: delta,
            reason: "must satisfy 0 ≤ delta ≤ (lambda - mu) / 2",
        });
    }
    Ok(())
}

/// Require at least one partition.
pub fn validate_partitions(q: usize) -> TSResult<()> {
    if q == 0 {
        return Err(TSError::InvalidArgument {
            name: "q",
            value: 0.0,
            reason: "number of partitions must be positive",
        });
    }
    Ok(())
}

/// Require two residual sequences of equal length.
pub fn validate_equal_length(u1: &[f64], u2: &[f64]) -> TSResult<()> {
    if u1.len() != u2.len() {
        return Err(TSError::LengthMismatch { len_u1: u1.len(), len_u2: u2.len() });
    }
    Ok(())
}

/// Require every residual to be finite.
pub fn validate_finite_residuals(name: &'static str, u: &[f64]) -> TSResult<()> {
    if let Some(&value) = u.iter().find(|v| !v.is_finite()) {
        return Err(TSError::InvalidArgument {
            name,
            value,
            reason: "residuals must be finite",
        });
    }
    Ok(())
}

/// Require two non-empty, finite residual sequences of equal length.
pub fn validate_paired_samples(u1: &[f64], u2: &[f64]) -> TSResult<()> {
    validate_equal_length(u1, u2)?;
    if u1.is_empty() {
        return Err(TSError::EmptySample);
    }
    validate_finite_residuals("u1", u1)?;
    validate_finite_residuals("u2", u2)
}
