//! statistical_tests::independence — capability shared by independence tests.
//!
//! Any test of independence between two residual sequences exposes a
//! descriptive name, the number of paired observations, and a p-value.
//! Variants implement [`IndependenceTest`] directly; there is no base type.
use crate::statistical_tests::errors::TSResult;

pub trait IndependenceTest {
    /// Human-readable name of the test.
    fn name(&self) -> &str;

    /// Number of paired observations the test is computed on.
    fn sample_size(&self) -> usize;

    /// Asymptotic p-value of the test statistic.
    ///
    /// Fallible because the statistic may depend on numerical integration
    /// performed on demand.
    fn p_value(&self) -> TSResult<f64>;
}
