//! statistical_tests — independence tests for generalized residuals.
//!
//! Purpose
//! -------
//! Collect statistical-test routines and their shared infrastructure. This
//! subtree currently implements the trimmed Spearman correlation test of
//! independence between two residual sequences, together with common input
//! validation, error handling, and the [`IndependenceTest`] capability.
//!
//! Key behaviors
//! -------------
//! - Expose the trimmed Spearman building blocks ([`TrimmingFunc`],
//!   [`PhiFunc`], [`TrimmedSpearmanCorrelation`]) and the test itself
//!   ([`TrimmedSpearmanCorrelationTest`], [`TSOutcome`]).
//! - Centralize domain guards in [`validation`] so constructors report the
//!   same [`TSError`] for the same violated constraint.
//! - Provide [`TSError`] / [`TSResult`] plus a PyO3 conversion when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Routines in this subtree never panic on user-facing invalid inputs.
//! - Two error kinds exist: invalid arguments (constructor-time domain
//!   violations) and numerical instability (non-finite φ constants).
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_independence::statistical_tests::{IndependenceTest, TrimmedSpearmanCorrelationTest};
//!
//!   let u1 = vec![0.12, 0.55, 0.91, 0.33, 0.71];
//!   let u2 = vec![0.64, 0.08, 0.47, 0.86, 0.29];
//!   let test = TrimmedSpearmanCorrelationTest::new(2, u1, u2)?;
//!   let p = test.p_value()?;
//!   # assert!((0.0..=1.0).contains(&p));
//!   # Ok::<(), rust_independence::statistical_tests::TSError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests for its own invariants; the null size
//!   of the full test is checked by the integration test in `tests/`.

pub mod errors;
pub mod independence;
pub mod trimmed_spearman;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TSError, TSErrorKind, TSResult};
pub use self::independence::IndependenceTest;
pub use self::trimmed_spearman::{
    PhiFunc, TSOutcome, TrimmedSpearmanCorrelation, TrimmedSpearmanCorrelationTest, TrimmingFunc,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_independence::statistical_tests::prelude::*;
//
// to import the main statistical-testing surface in a single line.

pub mod prelude {
    pub use super::errors::{TSError, TSResult};
    pub use super::independence::IndependenceTest;
    pub use super::trimmed_spearman::{TSOutcome, TrimmedSpearmanCorrelationTest};
}
