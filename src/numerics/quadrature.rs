//! numerics::quadrature — adaptive Gauss–Kronrod integration on finite
//! intervals.
//!
//! Purpose
//! -------
//! Provide the adaptive quadrature collaborator used to build φ contrasts:
//! a narrow [`Integrator`] trait plus the default [`GaussKronrod`]
//! implementation, configured through [`QuadratureOptions`].
//!
//! Key behaviors
//! -------------
//! - Globally adaptive bisection: the interval with the largest error
//!   estimate is split until the summed error meets
//!   `max(epsabs, epsrel · |I|)` or `limit` intervals exist.
//! - Each interval is integrated with the 15-point Kronrod rule; the
//!   embedded 7-point Gauss rule provides the error estimate.
//! - Stops early once any partial result is non-finite so that callers can
//!   surface the degenerate integral instead of looping on it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Endpoints are finite with `a ≤ b`; `a == b` integrates to zero.
//! - Hitting `limit` is not an error. The best estimate is returned with
//!   `converged = false`.
//!
//! Conventions
//! -----------
//! - With the `obs_slog` feature and `verbose = true`, one structured record
//!   per integration is written to a terminal `slog` logger. Otherwise the
//!   module performs no I/O.
use crate::statistical_tests::errors::{TSError, TSResult};

#[cfg(feature = "obs_slog")]
use slog::Drain;

// 15-point Kronrod abscissae on [-1, 1] (non-negative half, descending).
// Odd indices are the 7-point Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

// 7-point Gauss weights for XGK[1], XGK[3], XGK[5], XGK[7].
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Result of a single adaptive integration.
///
/// - `value`: best estimate of ∫ₐᵇ f.
/// - `abs_error`: summed Kronrod–Gauss error estimate.
/// - `intervals`: number of sub-intervals in the final partition.
/// - `converged`: whether the tolerance was met before `limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadOutcome {
    pub value: f64,
    pub abs_error: f64,
    pub intervals: usize,
    pub converged: bool,
}

/// Adaptive quadrature collaborator.
///
/// Implementors integrate a scalar function over a finite interval and
/// report an error estimate. φ construction calls this exactly twice.
pub trait Integrator {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> QuadOutcome
    where
        F: Fn(f64) -> f64;
}

/// QuadratureOptions — tolerances and limits for [`GaussKronrod`].
///
/// Fields
/// ------
/// - `epsabs`: absolute error target (≥ 0).
/// - `epsrel`: relative error target (≥ 0). At least one of the two
///   tolerances must be strictly positive.
/// - `limit`: maximum number of sub-intervals (≥ 1).
/// - `verbose`: log each integration when the `obs_slog` feature is on.
///
/// Default
/// -------
/// `epsabs = 0`, `epsrel = 1.49e-8` (≈ √ε), `limit = 200`, `verbose = false`.
/// The purely relative target keeps accuracy independent of band width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOptions {
    pub epsabs: f64,
    pub epsrel: f64,
    pub limit: usize,
    pub verbose: bool,
}

impl QuadratureOptions {
    /// Construct validated quadrature options.
    ///
    /// # Errors
    /// - [`TSError::InvalidQuadratureOption`] when a tolerance is negative or
    ///   non-finite, when both tolerances are zero, or when `limit == 0`.
    pub fn new(epsabs: f64, epsrel: f64, limit: usize, verbose: bool) -> TSResult<Self> {
        verify_tolerance("epsabs", epsabs)?;
        verify_tolerance("epsrel", epsrel)?;
        if epsabs == 0.0 && epsrel == 0.0 {
            return Err(TSError::InvalidQuadratureOption {
                name: "epsabs",
                value: epsabs,
                reason: "at least one of epsabs and epsrel must be positive",
            });
        }
        if limit == 0 {
            return Err(TSError::InvalidQuadratureOption {
                name: "limit",
                value: 0.0,
                reason: "interval limit must be greater than zero",
            });
        }
        Ok(Self { epsabs, epsrel, limit, verbose })
    }
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self { epsabs: 0.0, epsrel: 1.49e-8, limit: 200, verbose: false }
    }
}

/// Globally adaptive 7/15-point Gauss–Kronrod integrator.
///
/// With the `obs_slog` feature, a verbose integrator owns one terminal
/// logger built in [`GaussKronrod::new`]; clones share its async drain.
#[derive(Clone, Default)]
pub struct GaussKronrod {
    opts: QuadratureOptions,
    #[cfg(feature = "obs_slog")]
    logger: Option<slog::Logger>,
}

impl GaussKronrod {
    pub fn new(opts: QuadratureOptions) -> Self {
        Self {
            opts,
            #[cfg(feature = "obs_slog")]
            logger: opts.verbose.then(build_logger),
        }
    }

    pub fn options(&self) -> &QuadratureOptions {
        &self.opts
    }
}

impl std::fmt::Debug for GaussKronrod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaussKronrod").field("opts", &self.opts).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl Integrator for GaussKronrod {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> QuadOutcome
    where
        F: Fn(f64) -> f64,
    {
        if a == b {
            return QuadOutcome { value: 0.0, abs_error: 0.0, intervals: 0, converged: true };
        }

        let (value, error) = kronrod_15(&f, a, b);
        let mut segments: Vec<Segment> = vec![Segment { a, b, value, error }];
        let mut total = value;
        let mut total_error = error;
        let mut converged = false;

        loop {
            if !total.is_finite() || !total_error.is_finite() {
                break;
            }
            if total_error <= self.opts.epsabs.max(self.opts.epsrel * total.abs()) {
                converged = true;
                break;
            }
            if segments.len() >= self.opts.limit {
                break;
            }

            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            let parent = segments.swap_remove(worst);
            let mid = 0.5 * (parent.a + parent.b);
            if mid <= parent.a || mid >= parent.b {
                // Interval can no longer be split in f64.
                segments.push(parent);
                break;
            }

            let (left_value, left_error) = kronrod_15(&f, parent.a, mid);
            let (right_value, right_error) = kronrod_15(&f, mid, parent.b);
            segments.push(Segment { a: parent.a, b: mid, value: left_value, error: left_error });
            segments.push(Segment { a: mid, b: parent.b, value: right_value, error: right_error });

            total = segments.iter().map(|s| s.value).sum();
            total_error = segments.iter().map(|s| s.error).sum();
        }

        let outcome =
            QuadOutcome { value: total, abs_error: total_error, intervals: segments.len(), converged };

        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            log_outcome(logger, &outcome, a, b);
        }

        outcome
    }
}

// ---- Helper Methods ----

/// Apply the 15-point Kronrod rule on [a, b] and return
/// `(kronrod_estimate, |kronrod − gauss|)`.
fn kronrod_15<F>(f: &F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);

    let f_center = f(center);
    let mut result_kronrod = f_center * WGK[7];
    let mut result_gauss = f_center * WG[3];

    for (j, (&x, &wk)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half_length * x;
        let pair = f(center - dx) + f(center + dx);
        result_kronrod += wk * pair;
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * pair;
        }
    }

    let value = result_kronrod * half_length;
    let error = ((result_kronrod - result_gauss) * half_length).abs();
    (value, error)
}

fn verify_tolerance(name: &'static str, value: f64) -> TSResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TSError::InvalidQuadratureOption {
            name,
            value,
            reason: "tolerance must be finite and non-negative",
        });
    }
    Ok(())
}

#[cfg(feature = "obs_slog")]
fn build_logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, slog::o!("component" => "quadrature"))
}

#[cfg(feature = "obs_slog")]
fn log_outcome(logger: &slog::Logger, outcome: &QuadOutcome, a: f64, b: f64) {
    if outcome.converged {
        slog::info!(logger, "integration converged";
            "a" => a, "b" => b, "value" => outcome.value,
            "abs_error" => outcome.abs_error, "intervals" => outcome.intervals);
    } else {
        slog::warn!(logger, "integration stopped before reaching tolerance";
            "a" => a, "b" => b, "value" => outcome.value,
            "abs_error" => outcome.abs_error, "intervals" => outcome.intervals);
    }
}
