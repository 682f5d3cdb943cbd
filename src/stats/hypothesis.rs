//! One-sample z-test
//!
//! Compares the mean of a [`Sample`] against a hypothesized population mean using
//! the standard normal distribution. The computation returns a structured
//! [`TestResult`]; the narrative text is produced separately by
//! [`ZTestReport`](crate::stats::report::ZTestReport).

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::sample::Sample;
use crate::stats::descriptive::DescriptiveStatistics;
use crate::stats::distributions::{Distribution, StandardNormal};
use crate::stats::report::ZTestReport;

/// Default significance level (α)
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Direction of the alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailDirection {
    /// H₁: µ ≠ µ₀
    #[default]
    TwoTailed,
    /// H₁: µ < µ₀
    LeftTailed,
    /// H₁: µ > µ₀
    RightTailed,
}

impl TailDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TailDirection::TwoTailed => "two-tailed",
            TailDirection::LeftTailed => "left-tailed",
            TailDirection::RightTailed => "right-tailed",
        }
    }
}

impl fmt::Display for TailDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "two-tailed" => Ok(TailDirection::TwoTailed),
            "left-tailed" => Ok(TailDirection::LeftTailed),
            "right-tailed" => Ok(TailDirection::RightTailed),
            other => Err(Error::InvalidArgument(format!(
                "Invalid alternative hypothesis direction '{}'. Choose \"two-tailed\", \
                 \"left-tailed\" or \"right-tailed\"",
                other
            ))),
        }
    }
}

/// Parameters of a one-sample z-test
#[derive(Debug, Clone, PartialEq)]
pub struct ZTestConfig {
    /// Known population standard deviation. `None` (or zero) falls back to the
    /// sample standard deviation with Bessel's correction.
    pub population_std_dev: Option<f64>,
    /// Significance level α, strictly between 0 and 1
    pub significance_level: f64,
    pub direction: TailDirection,
    /// Log the rendered narrative at `info` level
    pub report: bool,
}

impl Default for ZTestConfig {
    fn default() -> Self {
        Self {
            population_std_dev: None,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            direction: TailDirection::TwoTailed,
            report: false,
        }
    }
}

impl ZTestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population_std_dev(mut self, std_dev: f64) -> Self {
        self.population_std_dev = Some(std_dev);
        self
    }

    pub fn with_significance_level(mut self, alpha: f64) -> Self {
        self.significance_level = alpha;
        self
    }

    pub fn with_direction(mut self, direction: TailDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }
}

/// Statistical hypothesis test result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Test statistic value (z)
    pub statistic: f64,
    /// P-value of the test
    pub p_value: f64,
    /// Whether the null hypothesis is rejected (`p_value < α`)
    pub rejected: bool,
}

/// A test result together with everything needed to describe it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZTestSummary {
    pub direction: TailDirection,
    pub hypothesized_mean: f64,
    /// Critical value rounded to 3 decimal places
    pub critical_value: f64,
    pub significance_level: f64,
    pub result: TestResult,
}

/// Round `value` to `places` decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Run a one-sample z-test and keep the context needed for reporting
pub fn z_test_summary(
    sample: &Sample,
    hypothesized_mean: f64,
    config: &ZTestConfig,
) -> Result<ZTestSummary> {
    let alpha = config.significance_level;
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::InvalidArgument(format!(
            "Significance level must be between 0 and 1, got {}",
            alpha
        )));
    }

    let sample_mean = sample.mean()?;
    let std_dev = match config.population_std_dev.filter(|s| *s != 0.0) {
        Some(s) => s,
        None => sample.standard_deviation()?,
    };

    let standard_error = std_dev / (sample.len() as f64).sqrt();
    if standard_error == 0.0 {
        return Err(Error::DivisionByZero(
            "Standard error is zero (constant sample and no population standard deviation)"
                .into(),
        ));
    }
    let statistic = (sample_mean - hypothesized_mean) / standard_error;

    let normal = StandardNormal::new()?;
    let (critical_value, p_value) = match config.direction {
        TailDirection::TwoTailed => (
            normal.inverse_cdf(1.0 - alpha / 2.0)?,
            2.0 * (1.0 - normal.cdf(statistic.abs())),
        ),
        TailDirection::RightTailed => (
            normal.inverse_cdf(1.0 - alpha)?,
            1.0 - normal.cdf(statistic),
        ),
        TailDirection::LeftTailed => (normal.inverse_cdf(alpha)?, normal.cdf(statistic)),
    };
    let critical_value = round_to(critical_value, 3);
    let rejected = p_value < alpha;

    debug!(
        "{} z-test: z={}, p={}, critical={}, alpha={}, rejected={}",
        config.direction, statistic, p_value, critical_value, alpha, rejected
    );

    Ok(ZTestSummary {
        direction: config.direction,
        hypothesized_mean,
        critical_value,
        significance_level: alpha,
        result: TestResult {
            statistic,
            p_value,
            rejected,
        },
    })
}

/// One-sample z-test
///
/// When `config.report` is set the narrative produced by [`ZTestReport`] is
/// logged at `info` level after the computation.
///
/// Fails with [`Error::DivisionByZero`] only when the standard error is
/// exactly zero. A constant sample whose mean does not round-trip (for
/// example `[0.1, 0.1, 0.1]`) gets a tiny nonzero standard deviation, and
/// the resulting z-value is huge rather than an error.
pub fn one_sample_z_test(
    sample: &Sample,
    hypothesized_mean: f64,
    config: &ZTestConfig,
) -> Result<TestResult> {
    let summary = z_test_summary(sample, hypothesized_mean, config)?;

    if config.report {
        info!("\n{}", ZTestReport::new(&summary));
    }

    Ok(summary.result)
}
