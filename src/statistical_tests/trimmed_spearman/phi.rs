//! trimmed_spearman::phi — centered and scaled trimmed rank contrasts.
//!
//! Purpose
//! -------
//! Build the contrast φ(u) = c · (u − m) · σ(u) attached to one trimming
//! interval, where σ is a [`TrimmingFunc`] and the constants are
//!
//! ```text
//! m = ∫_μ^λ u · σ(u) du,
//! c = 1 / sqrt( ∫_μ^λ (u − m)² · σ(u)² du ).
//! ```
//!
//! Under U ~ Uniform(0, 1) this gives E[φ(U)] = 0 and E[φ(U)²] = 1.
//!
//! Key behaviors
//! -------------
//! - Both integrals are computed once, at construction, through an
//!   [`Integrator`]; evaluation is pure arithmetic.
//! - A non-finite `m` or `c` is reported as
//!   [`TSError::NumericalInstability`] rather than retried.
//!
//! Invariants & assumptions
//! ------------------------
//! - `m` and `c` are finite for every constructed value; `c > 0`.
//! - Each `PhiFunc` owns its trimming function exclusively.
use crate::{
    numerics::quadrature::{GaussKronrod, Integrator},
    statistical_tests::{
        errors::{TSError, TSResult},
        trimmed_spearman::trimming::TrimmingFunc,
    },
};

/// PhiFunc — trimmed rank contrast on one quantile band.
///
/// Fields
/// ------
/// - `m`: centering constant ∫ u σ(u) du.
/// - `c`: scale 1 / sqrt(∫ (u − m)² σ(u)² du).
/// - `sigma`: the trimming function defining the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhiFunc {
    m: f64,
    c: f64,
    sigma: TrimmingFunc,
}

impl PhiFunc {
    /// Build φ on [mu, lambda] with the default ramp width and the default
    /// adaptive quadrature.
    ///
    /// # Errors
    /// - `InvalidArgument` from [`TrimmingFunc::with_default_delta`].
    /// - `NumericalInstability` when `m` or `c` is non-finite.
    pub fn new(mu: f64, lambda: f64) -> TSResult<Self> {
        Self::with_integrator(mu, lambda, &GaussKronrod::default())
    }

    /// Build φ on [mu, lambda] with the default ramp width and a caller
    /// supplied integrator.
    pub fn with_integrator<I: Integrator>(mu: f64, lambda: f64, integrator: &I) -> TSResult<Self> {
        let sigma = TrimmingFunc::with_default_delta(mu, lambda)?;
        Self::from_trimming(sigma, integrator)
    }

    /// Build φ from an already validated trimming function.
    ///
    /// # Errors
    /// - [`TSError::NumericalInstability`] naming `m` or `c` when the
    ///   corresponding integral is non-finite (or the variance integral is
    ///   zero, which sends `c` to infinity).
    pub fn from_trimming<I: Integrator>(sigma: TrimmingFunc, integrator: &I) -> TSResult<Self> {
        let (mu, lambda) = sigma.support();

        let m = integrator.integrate(|u| u * sigma.evaluate(u), mu, lambda).value;
        ensure_finite("m", m, &sigma)?;

        let variance = integrator
            .integrate(
                |u| {
                    let weighted = (u - m) * sigma.evaluate(u);
                    weighted * weighted
                },
                mu,
                lambda,
            )
            .value;
        let c = 1.0 / variance.sqrt();
        ensure_finite("c", c, &sigma)?;

        Ok(Self { m, c, sigma })
    }

    /// Evaluate φ(u) = c · (u − m) · σ(u).
    #[inline]
    pub fn evaluate(&self, u: f64) -> f64 {
        self.c * (u - self.m) * self.sigma.evaluate(u)
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn trimming(&self) -> &TrimmingFunc {
        &self.sigma
    }
}

fn ensure_finite(quantity: &'static str, value: f64, sigma: &TrimmingFunc) -> TSResult<()> {
    if !value.is_finite() {
        return Err(TSError::NumericalInstability {
            quantity,
            value,
            mu: sigma.mu(),
            lambda: sigma.lambda(),
            delta: sigma.delta(),
        });
    }
    Ok(())
}
