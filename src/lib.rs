//! rust_independence — trimmed Spearman independence testing for generalized
//! residuals, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the trimmed Spearman correlation test to Python via the
//! `_rust_independence` extension module. When the `python-bindings` feature
//! is enabled, this module defines the Python-facing class and submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`numerics` and `statistical_tests`)
//!   as the public crate surface.
//! - Define the `TrimmedSpearman` `#[pyclass]` wrapper and the
//!   `#[pymodule]` initializer for the `_rust_independence` extension.
//! - Register the `statistical_tests` Python submodule in `sys.modules` so
//!   that dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`TSError`] internally and
//!   converted to `ValueError` at the PyO3 boundary.
//! - Optional logging of quadrature runs is compiled in with the `obs_slog`
//!   feature and switched on per run through `QuadratureOptions::verbose`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration test under `tests/`.
//! - The PyO3 bindings are exercised from Python.
//!
//! [`TSError`]: crate::statistical_tests::TSError

pub mod numerics;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistical_tests::{IndependenceTest, TSOutcome, TrimmedSpearmanCorrelationTest},
    utils::extract_residuals,
};

/// TrimmedSpearman — Python-facing wrapper for the trimmed Spearman test.
///
/// Purpose
/// -------
/// Run the trimmed Spearman correlation test from Python and keep its full
/// outcome for property access.
///
/// Parameters
/// ----------
/// Constructed from Python via `TrimmedSpearman(u1, u2, q=2)`:
/// - `u1`, `u2`: `&PyAny`
///   One-dimensional array-likes of `f64` generalized residuals of equal
///   length.
/// - `q`: `usize`
///   Number of trimming bands; must be positive.
///
/// Fields
/// ------
/// - `inner`: [`TrimmedSpearmanCorrelationTest`] holding q and the data.
/// - `outcome`: [`TSOutcome`] computed once at construction.
///
/// Notes
/// -----
/// - Native Rust code should use [`TrimmedSpearmanCorrelationTest`]
///   directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_independence.statistical_tests")]
pub struct TrimmedSpearman {
    inner: TrimmedSpearmanCorrelationTest,
    outcome: TSOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TrimmedSpearman {
    /// Trimmed Spearman correlation test of independence.
    ///
    /// The statistic n·‖ρ̂‖² is asymptotically χ²(q²) under independence.
    #[new]
    #[pyo3(text_signature = "(u1, u2, /, q=2)", signature = (u1, u2, q = 2))]
    pub fn new<'py>(
        u1: &Bound<'py, PyAny>, u2: &Bound<'py, PyAny>, q: usize,
    ) -> PyResult<TrimmedSpearman> {
        if q == 0 {
            return Err(PyValueError::new_err("q must be positive"));
        }
        let u1 = extract_residuals(u1)?;
        let u2 = extract_residuals(u2)?;

        let inner = TrimmedSpearmanCorrelationTest::new(q, u1, u2)?;
        let outcome = inner.outcome()?;
        Ok(TrimmedSpearman { inner, outcome })
    }

    /// Name of the test.
    #[getter]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Number of paired residuals.
    #[getter]
    pub fn sample_size(&self) -> usize {
        self.inner.sample_size()
    }

    /// The test statistic n·‖ρ̂‖².
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.outcome.stat
    }

    /// Degrees of freedom q² of the reference χ² distribution.
    #[getter]
    pub fn dof(&self) -> f64 {
        self.outcome.dof
    }

    /// The p-value of the test.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.outcome.p_value
    }

    /// The q×q trimmed cross-correlation matrix.
    #[getter]
    pub fn rho_hat<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.outcome.rho_hat.clone().into_pyarray(py)
    }
}

/// _rust_independence — PyO3 module initializer for the Python extension.
///
/// Creates the `statistical_tests` submodule, attaches it to the parent
/// module, and registers it in `sys.modules` so
/// `rust_independence.statistical_tests` is importable by dotted path.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_independence<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_independence.statistical_tests", statistical_tests_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, rust_independence: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<TrimmedSpearman>()?;
    rust_independence.add_submodule(m)?;
    Ok(())
}
