//! trimmed_spearman::correlation — q×q trimmed Spearman cross-correlation.
//!
//! Purpose
//! -------
//! Partition the trimming range [τ_min, τ_max] into q equal-width bands,
//! attach one [`PhiFunc`] to each band, and estimate the cross-correlation
//! matrix between the φ-transforms of two residual sequences:
//!
//! ```text
//! ρ̂[i][j] = (1/n) ∑ₖ φᵢ(U1ₖ) · φⱼ(U2ₖ),   i, j = 1,…,q.
//! ```
//!
//! Key behaviors
//! -------------
//! - All integration cost is paid in the constructor, independent of n.
//! - [`TrimmedSpearmanCorrelation::evaluate`] builds the q×n transform
//!   matrices Φ₁, Φ₂ and returns Φ₁ · Φ₂ᵀ / n, an O(q²·n) product.
//!
//! Invariants & assumptions
//! ------------------------
//! - `q ≥ 1` and 0 < τ_min < τ_max < 1.
//! - `phis.len() == q`, ordered by band; band i covers
//!   [τ_{i−1}, τ_i] with τ_0 = τ_min and τ_q = τ_max.
//! - ρ̂ is generally not symmetric when U1 and U2 differ in distribution.
//!
//! Conventions
//! -----------
//! - Matrices are `ndarray::Array2<f64>`; rows index U1 bands, columns
//!   index U2 bands.
use crate::{
    numerics::quadrature::{GaussKronrod, Integrator},
    statistical_tests::{
        errors::TSResult,
        trimmed_spearman::phi::PhiFunc,
        validation::{
            validate_open_unit, validate_ordered, validate_paired_samples, validate_partitions,
        },
    },
};
use ndarray::{Array1, Array2};

/// Default lower trimming bound.
pub const DEFAULT_TAU_MIN: f64 = 0.01;
/// Default upper trimming bound.
pub const DEFAULT_TAU_MAX: f64 = 0.99;

/// TrimmedSpearmanCorrelation — family of q trimmed contrasts.
///
/// Fields
/// ------
/// - `q`: number of bands.
/// - `tau_min`, `tau_max`: trimming range.
/// - `phis`: one [`PhiFunc`] per band, in increasing order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedSpearmanCorrelation {
    q: usize,
    tau_min: f64,
    tau_max: f64,
    phis: Vec<PhiFunc>,
}

impl TrimmedSpearmanCorrelation {
    /// Build the contrast family on [tau_min, tau_max] with the default
    /// adaptive quadrature.
    ///
    /// # Errors
    /// - `InvalidArgument` when `q == 0`, either bound lies outside (0, 1),
    ///   or `tau_min >= tau_max`.
    /// - `NumericalInstability` propagated from any [`PhiFunc`].
    pub fn new(q: usize, tau_min: f64, tau_max: f64) -> TSResult<Self> {
        Self::with_integrator(q, tau_min, tau_max, &GaussKronrod::default())
    }

    /// Build with the default trimming range [0.01, 0.99].
    pub fn with_default_bounds(q: usize) -> TSResult<Self> {
        Self::new(q, DEFAULT_TAU_MIN, DEFAULT_TAU_MAX)
    }

    /// Build with a caller-supplied integrator.
    pub fn with_integrator<I: Integrator>(
        q: usize, tau_min: f64, tau_max: f64, integrator: &I,
    ) -> TSResult<Self> {
        validate_partitions(q)?;
        validate_open_unit("tau_min", tau_min)?;
        validate_open_unit("tau_max", tau_max)?;
        validate_ordered("tau_min", tau_min, tau_max)?;

        let taus = breakpoints(q, tau_min, tau_max);
        let phis = taus
            .windows(2)
            .into_iter()
            .map(|band| PhiFunc::with_integrator(band[0], band[1], integrator))
            .collect::<TSResult<Vec<PhiFunc>>>()?;

        Ok(Self { q, tau_min, tau_max, phis })
    }

    /// Estimate the q×q cross-correlation matrix between φ(U1) and φ(U2).
    ///
    /// # Errors
    /// - `LengthMismatch` when `u1.len() != u2.len()`.
    /// - `EmptySample` when both are empty.
    /// - `InvalidArgument` when any residual is NaN or infinite.
    pub fn evaluate(&self, u1: &[f64], u2: &[f64]) -> TSResult<Array2<f64>> {
        validate_paired_samples(u1, u2)?;
        let n = u1.len();

        let phi_u1 = self.transform(u1);
        let phi_u2 = self.transform(u2);
        Ok(phi_u1.dot(&phi_u2.t()) / n as f64)
    }

    /// q×n matrix with entry (i, k) = φᵢ(u[k]).
    fn transform(&self, u: &[f64]) -> Array2<f64> {
        Array2::from_shape_fn((self.q, u.len()), |(i, k)| self.phis[i].evaluate(u[k]))
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn tau_min(&self) -> f64 {
        self.tau_min
    }

    pub fn tau_max(&self) -> f64 {
        self.tau_max
    }

    pub fn phis(&self) -> &[PhiFunc] {
        &self.phis
    }

    /// Band endpoints τ_0 < τ_1 < … < τ_q.
    pub fn breakpoints(&self) -> Array1<f64> {
        breakpoints(self.q, self.tau_min, self.tau_max)
    }
}

/// Equally spaced breakpoints with the last one pinned to `tau_max`.
fn breakpoints(q: usize, tau_min: f64, tau_max: f64) -> Array1<f64> {
    let mut taus = Array1::linspace(tau_min, tau_max, q + 1);
    taus[q] = tau_max;
    taus
}
