//! Descriptive statistics module
//!
//! Summary statistics over a single [`Sample`], bivariate statistics over two
//! samples of equal length, and IQR based outlier removal.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::sample::Sample;

/// Default multiplier of the IQR used to place the outlier fences
pub const DEFAULT_OUTLIER_STEP: f64 = 1.5;

/// Most frequent value(s) of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// A single value has the highest frequency
    Single(f64),
    /// Several values tie at the highest frequency, in first-encountered order
    Multiple(Vec<f64>),
}

impl Mode {
    /// All modal values as a vector
    pub fn values(&self) -> Vec<f64> {
        match self {
            Mode::Single(value) => vec![*value],
            Mode::Multiple(values) => values.clone(),
        }
    }
}

/// Structure holding a descriptive summary of a sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    /// Number of observations
    pub count: usize,
    pub sum: f64,
    /// Mean value (no Bessel's correction)
    pub mean: f64,
    /// Median of the sorted observations
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Variance (with Bessel's correction)
    pub variance: f64,
    /// Standard deviation (with Bessel's correction)
    pub std_dev: f64,
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Interquartile range
    pub iqr: f64,
}

/// Statistics computed over a sample of observations
///
/// Methods without a `_with` suffix use the conventional default for Bessel's
/// correction: off for [`mean`](Self::mean), on for variance, standard deviation
/// and covariance.
pub trait DescriptiveStatistics {
    /// Arithmetic mean, `sum / N`
    fn mean(&self) -> Result<f64> {
        self.mean_with(false)
    }

    /// Arithmetic mean, dividing by `N - 1` when `bessel_correction` is set
    fn mean_with(&self, bessel_correction: bool) -> Result<f64>;

    /// Median of the observations in their current order
    ///
    /// The observations must already be sorted; use [`Sample::sorted`] first
    /// when they are not.
    fn median(&self) -> Result<f64>;

    /// Most frequent value(s); fails with [`Error::NoModeFound`] when every value is unique
    fn mode(&self) -> Result<Mode>;

    /// `max - min`
    fn range(&self) -> Result<f64>;

    /// `value - mean` for each observation, squared when `squared` is set
    fn deviations_from_mean(&self, squared: bool) -> Result<Sample>;

    /// Variance with Bessel's correction
    fn variance(&self) -> Result<f64> {
        self.variance_with(true)
    }

    /// Mean of the squared deviations
    fn variance_with(&self, bessel_correction: bool) -> Result<f64>;

    /// Standard deviation with Bessel's correction
    fn standard_deviation(&self) -> Result<f64> {
        self.standard_deviation_with(true)
    }

    /// Square root of [`variance_with`](Self::variance_with)
    fn standard_deviation_with(&self, bessel_correction: bool) -> Result<f64> {
        Ok(self.variance_with(bessel_correction)?.sqrt())
    }

    /// Covariance with Bessel's correction
    fn covariance(&self, other: &Sample) -> Result<f64> {
        self.covariance_with(other, true, false)
    }

    /// Covariance; `total_only` returns the raw sum of deviation products
    fn covariance_with(
        &self,
        other: &Sample,
        bessel_correction: bool,
        total_only: bool,
    ) -> Result<f64>;

    /// Pearson correlation coefficient
    ///
    /// Fails with [`Error::DivisionByZero`] when either sample has a sum of
    /// squared deviations of exactly zero. A constant sample such as
    /// `[0.1, 0.1, 0.1]` can leave rounding residue in its deviations and
    /// then yields a finite coefficient instead of an error.
    fn pearson_correlation(&self, other: &Sample) -> Result<f64>;

    /// `[Q1, Q2, Q3]` using the exclusive median method
    fn quantiles(&self) -> Result<[f64; 3]>;

    /// `Q3 - Q1`
    fn interquartile_range(&self) -> Result<f64> {
        let [q1, _, q3] = self.quantiles()?;
        Ok(q3 - q1)
    }

    /// Remove every observation outside `[Q1 - step * IQR, Q3 + step * IQR]`
    ///
    /// Returns the removed observations in their original order.
    fn remove_outliers_iqr(&mut self, step: f64) -> Result<Vec<f64>>;
}

impl DescriptiveStatistics for Sample {
    fn mean_with(&self, bessel_correction: bool) -> Result<f64> {
        let n = self.len();
        if n == 0 {
            return Err(Error::EmptySample(
                "Mean calculation requires at least one observation".into(),
            ));
        }

        if bessel_correction {
            if n == 1 {
                return Err(Error::DivisionByZero(
                    "Bessel's correction requires at least two observations".into(),
                ));
            }
            Ok(self.sum() / (n - 1) as f64)
        } else {
            Ok(self.sum() / n as f64)
        }
    }

    fn median(&self) -> Result<f64> {
        let values = self.values();
        if values.is_empty() {
            return Err(Error::EmptySample(
                "Median calculation requires at least one observation".into(),
            ));
        }

        let mid = values.len() / 2;
        if !self.is_size_even() {
            return Ok(values[mid]);
        }

        Ok((values[mid - 1] + values[mid]) / 2.0)
    }

    fn mode(&self) -> Result<Mode> {
        // Frequencies in first-encountered order; keyed on the bit pattern so that
        // -0.0 and 0.0 land in the same bucket.
        let mut position: HashMap<u64, usize> = HashMap::new();
        let mut frequencies: Vec<(f64, usize)> = Vec::new();
        for &value in self.iter() {
            let key = if value == 0.0 { 0.0f64 } else { value }.to_bits();
            let idx = *position.entry(key).or_insert_with(|| {
                frequencies.push((value, 0));
                frequencies.len() - 1
            });
            frequencies[idx].1 += 1;
        }

        let max_freq = frequencies.iter().map(|&(_, f)| f).max().unwrap_or(0);
        if max_freq <= 1 {
            return Err(Error::NoModeFound);
        }

        let mut modes: Vec<f64> = frequencies
            .into_iter()
            .filter(|&(_, f)| f == max_freq)
            .map(|(v, _)| v)
            .collect();

        if modes.len() == 1 {
            Ok(Mode::Single(modes.remove(0)))
        } else {
            Ok(Mode::Multiple(modes))
        }
    }

    fn range(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptySample(
                "Range calculation requires at least one observation".into(),
            ));
        }

        let min = self.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(max - min)
    }

    fn deviations_from_mean(&self, squared: bool) -> Result<Sample> {
        let mean = self.mean()?;
        let deviations: Sample = self.iter().map(|&v| v - mean).collect();

        Ok(if squared {
            deviations.elementwise_power(2)
        } else {
            deviations
        })
    }

    fn variance_with(&self, bessel_correction: bool) -> Result<f64> {
        self.deviations_from_mean(true)?
            .mean_with(bessel_correction)
    }

    fn covariance_with(
        &self,
        other: &Sample,
        bessel_correction: bool,
        total_only: bool,
    ) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let x = self.deviations_from_mean(false)?;
        let y = other.deviations_from_mean(false)?;
        let products = x.elementwise_product(&y)?;

        if total_only {
            Ok(products.sum())
        } else {
            products.mean_with(bessel_correction)
        }
    }

    fn pearson_correlation(&self, other: &Sample) -> Result<f64> {
        let total = self.covariance_with(other, true, true)?;

        // Denominator: √Σ(xi - x̄)² · √Σ(yi - ȳ)²
        let ss_x = self.deviations_from_mean(true)?.sum();
        let ss_y = other.deviations_from_mean(true)?.sum();
        let denominator = ss_x.sqrt() * ss_y.sqrt();

        if denominator == 0.0 {
            return Err(Error::DivisionByZero(
                "Correlation calculation: zero variance".into(),
            ));
        }

        Ok(total / denominator)
    }

    fn quantiles(&self) -> Result<[f64; 3]> {
        let sorted = self.sorted();
        let values = sorted.values();

        // Odd sizes leave the middle observation out of both halves
        let mid = values.len() / 2;
        let upper_start = if self.is_size_even() { mid } else { mid + 1 };

        let q1 = Sample::from(&values[..mid]).median()?;
        let q3 = Sample::from(&values[upper_start..]).median()?;
        let q2 = sorted.median()?;

        Ok([q1, q2, q3])
    }

    fn remove_outliers_iqr(&mut self, step: f64) -> Result<Vec<f64>> {
        let [q1, _, q3] = self.quantiles()?;
        let iqr = q3 - q1;
        let lower = q1 - step * iqr;
        let upper = q3 + step * iqr;
        debug!(
            "IQR outlier fences: [{}, {}] (Q1={}, Q3={}, step={})",
            lower, upper, q1, q3, step
        );

        let removed = self.partition_retain(|v| !(v < lower || v > upper));
        for value in &removed {
            info!("The outlier {} has been removed", value);
        }

        Ok(removed)
    }
}

/// Calculate a descriptive summary of a sample
///
/// Requires at least two observations, since the quartile halves and the
/// corrected variance are undefined below that.
pub fn describe(sample: &Sample) -> Result<DescriptiveSummary> {
    if sample.len() < 2 {
        return Err(Error::EmptySample(format!(
            "Descriptive summary requires at least 2 observations, got {}",
            sample.len()
        )));
    }

    let sorted = sample.sorted();
    let [q1, median, q3] = sample.quantiles()?;
    let variance = sample.variance()?;
    let min = sorted.values()[0];
    let max = sorted.values()[sorted.len() - 1];

    Ok(DescriptiveSummary {
        count: sample.len(),
        sum: sample.sum(),
        mean: sample.mean()?,
        median,
        min,
        max,
        range: max - min,
        variance,
        std_dev: variance.sqrt(),
        q1,
        q3,
        iqr: q3 - q1,
    })
}
