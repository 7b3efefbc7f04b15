//! numerics — numerical collaborators for the statistical tests.
//!
//! Purpose
//! -------
//! Collect the two external numerical services the trimmed Spearman test
//! relies on, each behind a narrow trait so the test logic does not depend
//! on which implementation supplies them.
//!
//! Key behaviors
//! -------------
//! - [`Integrator`] / [`GaussKronrod`]: adaptive quadrature on finite
//!   intervals, configured by [`QuadratureOptions`].
//! - [`UpperTail`] / [`StatrsChiSquared`]: χ² survival function backed by
//!   `statrs`.
//!
//! Conventions
//! -----------
//! - Both collaborators are pure; neither keeps state between calls.
//! - Unit tests in the statistical-test modules substitute stub
//!   implementations of these traits for deterministic checks.

pub mod chi_squared;
pub mod quadrature;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::chi_squared::{StatrsChiSquared, UpperTail};
pub use self::quadrature::{GaussKronrod, Integrator, QuadOutcome, QuadratureOptions};
