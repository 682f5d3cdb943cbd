//! statkit Statistics Module
//!
//! This module provides the statistical functionality of the crate: descriptive
//! statistics over a [`Sample`], the standard normal distribution, and the
//! one-sample z-test with its report renderer.

// Feature modules
pub mod descriptive;
pub mod distributions;
pub mod hypothesis;
pub mod report;

use crate::core::error::Result;
use crate::core::sample::Sample;

pub use descriptive::{DescriptiveStatistics, DescriptiveSummary, Mode, DEFAULT_OUTLIER_STEP};
pub use distributions::{Distribution, StandardNormal};
pub use hypothesis::{
    one_sample_z_test, z_test_summary, TailDirection, TestResult, ZTestConfig, ZTestSummary,
    DEFAULT_SIGNIFICANCE_LEVEL,
};
pub use report::ZTestReport;

// Public API functions

/// Calculate basic statistics for data
///
/// # Description
/// Calculates count, sum, mean, median, extremes, variance, standard deviation
/// and quartiles for a numeric array of at least two values.
///
/// # Example
/// ```rust
/// use statkit::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let summary = stats::describe(&data).unwrap();
/// println!("Mean: {}", summary.mean);
/// println!("Standard deviation: {}", summary.std_dev);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveSummary> {
    descriptive::describe(&Sample::from(data.as_ref()))
}

/// Calculate correlation coefficient
///
/// # Description
/// Calculates the Pearson correlation coefficient between two numeric arrays
/// of equal length.
///
/// # Example
/// ```rust
/// use statkit::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
/// let corr = stats::correlation(&x, &y).unwrap();
/// println!("Correlation coefficient: {}", corr);
/// ```
pub fn correlation<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    Sample::from(x.as_ref()).pearson_correlation(&Sample::from(y.as_ref()))
}

/// Calculate covariance
///
/// # Description
/// Calculates the covariance (with Bessel's correction) between two numeric
/// arrays of equal length.
///
/// # Example
/// ```rust
/// use statkit::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
/// let cov = stats::covariance(&x, &y).unwrap();
/// println!("Covariance: {}", cov);
/// ```
pub fn covariance<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    Sample::from(x.as_ref()).covariance(&Sample::from(y.as_ref()))
}

/// Perform a one-sample z-test
///
/// # Example
/// ```rust
/// use statkit::stats::{self, TailDirection, ZTestConfig};
///
/// let data = vec![10.2, 9.8, 10.4, 10.1, 9.9, 10.6];
/// let config = ZTestConfig::new()
///     .with_population_std_dev(0.3)
///     .with_direction(TailDirection::RightTailed);
/// let result = stats::z_test(&data, 10.0, &config).unwrap();
/// println!("z: {}, p: {}, rejected: {}", result.statistic, result.p_value, result.rejected);
/// ```
pub fn z_test<T: AsRef<[f64]>>(
    data: T,
    hypothesized_mean: f64,
    config: &ZTestConfig,
) -> Result<TestResult> {
    one_sample_z_test(&Sample::from(data.as_ref()), hypothesized_mean, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_api() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert!((covariance(&x, &y).unwrap() - 2.5).abs() < 1e-10);
        assert!((correlation(&x, &y).unwrap() - 1.0).abs() < 1e-10);
        assert_eq!(describe(&x).unwrap().count, 5);

        let result = z_test(&x, 3.0, &ZTestConfig::default()).unwrap();
        assert!(!result.rejected);
    }
}
