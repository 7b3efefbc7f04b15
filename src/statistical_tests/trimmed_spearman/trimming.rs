//! trimmed_spearman::trimming — Lipschitz trimming weights on [0, 1].
//!
//! Purpose
//! -------
//! Represent the trimming function σ that approximates the indicator of an
//! interval [μ, λ] with linear ramps of width δ at both edges, normalized
//! so that the plateau height is K = 1 / (λ − μ − δ) and ∫σ = 1.
//!
//! Key behaviors
//! -------------
//! - Validate (μ, λ, δ) once at construction; evaluation is infallible.
//! - Store only the three scalars plus K; [`TrimmingFunc::evaluate`]
//!   recomputes the piecewise formula on every call.
//!
//! Invariants & assumptions
//! ------------------------
//! - 0 ≤ μ < λ ≤ 1 and 0 ≤ δ ≤ (λ − μ) / 2.
//! - σ is continuous, zero outside [μ, λ], and integrates to 1.
//! - With δ = 0 the ramps are empty and σ is K·1[μ, λ].
use crate::statistical_tests::{
    errors::TSResult,
    validation::{validate_closed_unit, validate_ordered, validate_ramp_width},
};

/// Default ramp width as a fraction of the half-width (λ − μ) / 2.
pub const DEFAULT_DELTA_FRACTION: f64 = 0.1;

/// TrimmingFunc — piecewise-linear trimming weight σ on [μ, λ].
///
/// Fields
/// ------
/// - `mu`, `lambda`: interval endpoints.
/// - `delta`: ramp width at each edge.
/// - `norm_const`: plateau height K = 1 / (λ − μ − δ).
///
/// Invariants
/// ----------
/// - `0 ≤ mu < lambda ≤ 1`, `0 ≤ delta ≤ (lambda − mu) / 2`.
/// - `norm_const` is finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmingFunc {
    mu: f64,
    lambda: f64,
    delta: f64,
    norm_const: f64,
}

impl TrimmingFunc {
    /// Build a trimming function with an explicit ramp width.
    ///
    /// # Errors
    /// - [`TSError::InvalidArgument`](crate::statistical_tests::errors::TSError::InvalidArgument)
    ///   naming `mu`, `lambda`, or `delta` when
    ///   `0 ≤ mu ≤ 1`, `0 ≤ lambda ≤ 1`, `mu < lambda`, or
    ///   `0 ≤ delta ≤ (lambda − mu) / 2` is violated.
    pub fn new(mu: f64, lambda: f64, delta: f64) -> TSResult<Self> {
        validate_closed_unit("mu", mu)?;
        validate_closed_unit("lambda", lambda)?;
        validate_ordered("mu", mu, lambda)?;
        validate_ramp_width(delta, mu, lambda)?;

        Ok(Self { mu, lambda, delta, norm_const: 1.0 / (lambda - mu - delta) })
    }

    /// Build a trimming function with δ = 0.1 · (λ − μ) / 2.
    pub fn with_default_delta(mu: f64, lambda: f64) -> TSResult<Self> {
        Self::new(mu, lambda, DEFAULT_DELTA_FRACTION * (lambda - mu) / 2.0)
    }

    /// Evaluate σ(u).
    pub fn evaluate(&self, u: f64) -> f64 {
        let Self { mu, lambda, delta, norm_const } = *self;

        if mu + delta <= u && u <= lambda - delta {
            norm_const
        } else if u < mu || u > lambda {
            0.0
        } else if u < mu + delta {
            norm_const * (u - mu) / delta
        } else {
            norm_const * (lambda - u) / delta
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Plateau height K = 1 / (λ − μ − δ).
    pub fn norm_const(&self) -> f64 {
        self.norm_const
    }

    /// Support interval (μ, λ).
    pub fn support(&self) -> (f64, f64) {
        (self.mu, self.lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::quadrature::{GaussKronrod, Integrator};
    use crate::statistical_tests::errors::TSError;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Plateau, ramp, and outside values on a hand-computable example.
    // - Continuity at the four breakpoints and unit mass.
    // - Construction failures for each violated constraint.
    // - The default ramp width.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Check the worked example μ = 0.2, λ = 0.4, δ = 0.05.
    //
    // Given
    // -----
    // - K = 1 / 0.15.
    //
    // Expect
    // ------
    // - σ(0.25) = K, σ(0.21) = K · 0.2, σ(0.5) = 0, σ(0.38) = K · 0.4.
    fn trimming_func_worked_example() {
        // Arrange
        let sigma = TrimmingFunc::new(0.2, 0.4, 0.05).unwrap();
        let k = 1.0 / 0.15;

        // Act / Assert
        assert_abs_diff_eq!(sigma.norm_const(), k, epsilon = TOL);
        assert_abs_diff_eq!(sigma.evaluate(0.25), k, epsilon = TOL);
        assert_abs_diff_eq!(sigma.evaluate(0.21), k * 0.2, epsilon = 1e-10);
        assert_abs_diff_eq!(sigma.evaluate(0.38), k * 0.4, epsilon = 1e-10);
        assert_eq!(sigma.evaluate(0.5), 0.0);
        assert_eq!(sigma.evaluate(0.1), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // σ has no jumps at μ, μ + δ, λ − δ, λ.
    //
    // Given
    // -----
    // - Several valid (μ, λ, δ) triples, including δ at its maximum.
    //
    // Expect
    // ------
    // - Values at ± 1e-9 around each breakpoint differ by no more than the
    //   Lipschitz bound 2h · K / δ.
    fn trimming_func_is_continuous_at_breakpoints() {
        let cases = [(0.2, 0.4, 0.05), (0.0, 1.0, 0.1), (0.01, 0.5, 0.245), (0.3, 0.9, 0.0003)];
        let h = 1e-9;

        for (mu, lambda, delta) in cases {
            let sigma = TrimmingFunc::new(mu, lambda, delta).unwrap();
            let bound = 2.0 * h * sigma.norm_const() / delta + 1e-12;
            for point in [mu, mu + delta, lambda - delta, lambda] {
                let left = sigma.evaluate(point - h);
                let right = sigma.evaluate(point + h);
                let at = sigma.evaluate(point);
                assert!(
                    (left - right).abs() <= bound && (at - left).abs() <= bound,
                    "jump at {point} for ({mu}, {lambda}, {delta}): {left}, {at}, {right}"
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // σ integrates to 1 over its support.
    //
    // Given
    // -----
    // - Default adaptive quadrature on [μ, λ] for several triples.
    //
    // Expect
    // ------
    // - |∫σ − 1| < 1e-6.
    fn trimming_func_has_unit_mass() {
        let integrator = GaussKronrod::default();
        let cases = [(0.2, 0.4, 0.05), (0.0, 1.0, 0.5), (0.01, 0.99, 0.049), (0.5, 0.51, 0.0)];

        for (mu, lambda, delta) in cases {
            let sigma = TrimmingFunc::new(mu, lambda, delta).unwrap();
            let mass = integrator.integrate(|u| sigma.evaluate(u), mu, lambda).value;
            assert_abs_diff_eq!(mass, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // Each violated constraint is reported against the right parameter.
    //
    // Given
    // -----
    // - mu = -0.1, lambda = 1.2, mu == lambda (0.5, 0.5, 0.0), delta too big,
    //   delta negative.
    //
    // Expect
    // ------
    // - `InvalidArgument` naming mu, lambda, mu, delta, delta.
    fn trimming_func_rejects_invalid_parameters() {
        let cases = [
            ((-0.1, 0.4, 0.0), "mu"),
            ((0.1, 1.2, 0.0), "lambda"),
            ((0.5, 0.5, 0.0), "mu"),
            ((0.2, 0.4, 0.11), "delta"),
            ((0.2, 0.4, -0.01), "delta"),
            ((0.2, 0.4, f64::NAN), "delta"),
        ];

        for ((mu, lambda, delta), expected) in cases {
            let err = TrimmingFunc::new(mu, lambda, delta).unwrap_err();
            assert!(err.is_invalid_argument());
            match err {
                TSError::InvalidArgument { name, .. } => {
                    assert_eq!(name, expected, "wrong parameter for ({mu}, {lambda}, {delta})");
                }
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // The two-argument constructor uses δ = 0.1 · (λ − μ) / 2.
    //
    // Given
    // -----
    // - μ = 0.2, λ = 0.6.
    //
    // Expect
    // ------
    // - δ = 0.02 and K = 1 / 0.38.
    fn trimming_func_default_delta() {
        let sigma = TrimmingFunc::with_default_delta(0.2, 0.6).unwrap();
        assert_abs_diff_eq!(sigma.delta(), 0.02, epsilon = TOL);
        assert_abs_diff_eq!(sigma.norm_const(), 1.0 / 0.38, epsilon = 1e-10);
        assert_eq!(sigma.support(), (0.2, 0.6));
    }

    #[test]
    // Purpose
    // -------
    // With δ = 0 the function is a scaled indicator with no division by zero.
    //
    // Given
    // -----
    // - μ = 0.3, λ = 0.5, δ = 0.
    //
    // Expect
    // ------
    // - σ = 5 on [0.3, 0.5] including the endpoints, 0 outside.
    fn trimming_func_zero_delta_is_indicator() {
        let sigma = TrimmingFunc::new(0.3, 0.5, 0.0).unwrap();
        for u in [0.3, 0.4, 0.5] {
            assert_abs_diff_eq!(sigma.evaluate(u), 5.0, epsilon = 1e-10);
        }
        assert_eq!(sigma.evaluate(0.29), 0.0);
        assert_eq!(sigma.evaluate(0.51), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // The widest admissible ramp, δ = (λ − μ) / 2 computed in f64, passes
    // the ramp-width guard and yields a triangle.
    //
    // Given
    // -----
    // - μ = 0.1, λ = 0.3, δ = (λ − μ) / 2, which is not exactly 0.1.
    //
    // Expect
    // ------
    // - Construction succeeds, K ≈ 10, the peak at μ + δ is K and the ramp
    //   midpoint 0.15 is K / 2.
    fn trimming_func_accepts_exact_half_width() {
        let (mu, lambda) = (0.1, 0.3);
        let delta = (lambda - mu) / 2.0;

        let sigma = TrimmingFunc::new(mu, lambda, delta).unwrap();

        assert_eq!(sigma.delta(), delta);
        assert_abs_diff_eq!(sigma.norm_const(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sigma.evaluate(mu + delta), sigma.norm_const(), epsilon = 1e-9);
        assert_abs_diff_eq!(sigma.evaluate(0.15), 5.0, epsilon = 1e-9);
    }
}
