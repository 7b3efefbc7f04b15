//! numerics::chi_squared — χ² upper-tail probabilities.
//!
//! The test statistic is referred to a χ²(q²) distribution; this module
//! hides the distribution library behind [`UpperTail`] so the test pipeline
//! can be driven by a stub in unit tests.
use crate::statistical_tests::errors::{TSError, TSResult};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Survival-function collaborator for a family indexed by degrees of freedom.
pub trait UpperTail {
    /// Return P(X > x) for X with `dof` degrees of freedom.
    fn survival(&self, dof: f64, x: f64) -> TSResult<f64>;
}

/// [`UpperTail`] backed by `statrs::distribution::ChiSquared`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsChiSquared;

impl UpperTail for StatrsChiSquared {
    fn survival(&self, dof: f64, x: f64) -> TSResult<f64> {
        let dist = ChiSquared::new(dof).map_err(|_| TSError::InvalidArgument {
            name: "dof",
            value: dof,
            reason: "degrees of freedom must be finite and positive",
        })?;
        Ok(dist.sf(x))
    }
}
