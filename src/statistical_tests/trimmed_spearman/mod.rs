//! statistical_tests::trimmed_spearman — trimmed Spearman correlation test.
//!
//! Purpose
//! -------
//! Implement a nonparametric test of independence between two sequences of
//! generalized residuals (values nominally in [0, 1], e.g. probability
//! integral transforms). The trimming range is split into q quantile
//! bands; a centered, variance-normalized contrast φᵢ is attached to each,
//! and the q×q cross-correlations of the transformed sequences are pooled
//! into a χ²(q²) statistic.
//!
//! Key behaviors
//! -------------
//! - [`TrimmingFunc`]: Lipschitz approximation of a band indicator.
//! - [`PhiFunc`]: contrast c · (u − m) · σ(u), with m and c obtained by
//!   adaptive quadrature at construction.
//! - [`TrimmedSpearmanCorrelation`]: q contrasts and the empirical q×q
//!   cross-correlation matrix.
//! - [`TrimmedSpearmanCorrelationTest`]: statistic n·‖ρ̂‖²_F and its
//!   p-value, exposed through
//!   [`IndependenceTest`](crate::statistical_tests::IndependenceTest).
//!
//! Composition
//! -----------
//! Test → Correlation → q × PhiFunc → q × TrimmingFunc. Integration runs
//! bottom-up once per contrast; sample data flows top-down at evaluation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every value is immutable after construction and all operations are
//!   pure, so instances can be shared freely across threads.
//! - Errors are reported through
//!   [`TSResult`](crate::statistical_tests::TSResult); nothing panics on
//!   user input.

pub mod correlation;
pub mod phi;
pub mod trimming;

pub use self::correlation::{DEFAULT_TAU_MAX, DEFAULT_TAU_MIN, TrimmedSpearmanCorrelation};
pub use self::phi::PhiFunc;
pub use self::spearman_test::{TSOutcome, TrimmedSpearmanCorrelationTest};
pub use self::trimming::{DEFAULT_DELTA_FRACTION, TrimmingFunc};
