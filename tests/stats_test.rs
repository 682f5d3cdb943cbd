//! Descriptive statistics tests
//!
//! Exercises the public `Sample` / `DescriptiveStatistics` API end to end.

use statkit::stats::{self, DEFAULT_OUTLIER_STEP};
use statkit::{DescriptiveStatistics, Error, Mode, Sample};

#[test]
fn test_mean_identities() {
    let data = vec![3.5, -2.0, 7.25, 10.0, 0.5, 4.0];
    let sample = Sample::from(data.clone());
    let sum: f64 = data.iter().sum();
    let n = data.len() as f64;

    assert!((sample.sum() - sum).abs() < 1e-10);
    assert!((sample.mean().unwrap() - sum / n).abs() < 1e-10);
    assert!((sample.mean_with(true).unwrap() - sum / (n - 1.0)).abs() < 1e-10);
}

#[test]
fn test_bessel_correction_inflates_variance() {
    let samples = [
        vec![1.0, 2.0],
        vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
        vec![-10.0, 0.0, 10.0, 20.5],
    ];

    for data in samples {
        let sample = Sample::from(data);
        let population = sample.variance_with(false).unwrap();
        let corrected = sample.variance().unwrap();
        assert!(population >= 0.0);
        assert!(corrected > population);
        assert!(
            (sample.standard_deviation().unwrap() - corrected.sqrt()).abs() < 1e-10
        );
    }

    let constant = Sample::from(vec![4.0, 4.0, 4.0]);
    assert_eq!(constant.variance_with(false).unwrap(), 0.0);
}

#[test]
fn test_median_of_sorted_copy_is_order_independent() {
    let a = Sample::from(vec![9.0, 1.0, 5.0, 3.0, 7.0, 2.0]);
    let b = Sample::from(vec![2.0, 3.0, 7.0, 9.0, 5.0, 1.0]);
    let ma = a.sorted().median().unwrap();
    let mb = b.sorted().median().unwrap();
    assert!((ma - 4.0).abs() < 1e-10);
    assert!((ma - mb).abs() < 1e-10);
}

#[test]
fn test_quartile_convention() {
    let even = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(even.quantiles().unwrap(), [2.5, 4.5, 6.5]);

    let odd = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(odd.quantiles().unwrap(), [2.0, 4.0, 6.0]);
    assert!((odd.interquartile_range().unwrap() - 4.0).abs() < 1e-10);
}

#[test]
fn test_mode_variants() {
    let tie = Sample::from(vec![1.0, 1.0, 2.0, 2.0, 3.0]);
    assert_eq!(tie.mode().unwrap(), Mode::Multiple(vec![1.0, 2.0]));

    let single = Sample::from(vec![1.0, 2.0, 2.0, 3.0]);
    assert_eq!(single.mode().unwrap(), Mode::Single(2.0));

    let unique = Sample::from(vec![1.0, 2.0, 3.0]);
    assert!(matches!(unique.mode(), Err(Error::NoModeFound)));
}

#[test]
fn test_outlier_removal_keeps_relative_order() {
    let mut sample = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
    let removed = sample.remove_outliers_iqr(DEFAULT_OUTLIER_STEP).unwrap();

    assert_eq!(removed, vec![100.0]);
    assert_eq!(sample.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(sample.len(), 5);
    assert!((sample.mean().unwrap() - 3.0).abs() < 1e-10);
}

#[test]
fn test_outlier_removal_on_shuffled_input() {
    let mut sample = Sample::from(vec![100.0, 3.0, 1.0, 5.0, 2.0, 4.0]);
    sample.remove_outliers_iqr(1.5).unwrap();
    assert_eq!(sample.to_vec(), vec![3.0, 1.0, 5.0, 2.0, 4.0]);
}

#[test]
fn test_outlier_fences_are_inclusive() {
    // Q1 = 2, Q3 = 5, IQR = 3: fences at -2.5 and 9.5
    let mut on_upper = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 9.5]);
    assert!(on_upper.remove_outliers_iqr(1.5).unwrap().is_empty());
    assert_eq!(on_upper.len(), 6);

    let mut past_upper = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 9.6]);
    assert_eq!(past_upper.remove_outliers_iqr(1.5).unwrap(), vec![9.6]);

    let mut on_lower = Sample::from(vec![-2.5, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(on_lower.remove_outliers_iqr(1.5).unwrap().is_empty());

    let mut past_lower = Sample::from(vec![-2.6, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(past_lower.remove_outliers_iqr(1.5).unwrap(), vec![-2.6]);
}

#[test]
fn test_outlier_removal_with_zero_step() {
    // fences collapse to [Q1, Q3] = [2, 5]; the quartiles themselves stay
    let mut sample = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 9.5]);
    let removed = sample.remove_outliers_iqr(0.0).unwrap();
    assert_eq!(removed, vec![1.0, 9.5]);
    assert_eq!(sample.to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_bivariate_statistics() {
    let x = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let y = Sample::from(vec![2.0, 4.0, 5.0, 4.0, 5.0]);

    // Σ(x-x̄)(y-ȳ) = 6, Σ(x-x̄)² = 10, Σ(y-ȳ)² = 6
    assert!((x.covariance_with(&y, true, true).unwrap() - 6.0).abs() < 1e-10);
    assert!((x.covariance(&y).unwrap() - 1.5).abs() < 1e-10);
    assert!((x.covariance_with(&y, false, false).unwrap() - 1.2).abs() < 1e-10);
    let expected = 6.0 / (10.0f64.sqrt() * 6.0f64.sqrt());
    assert!((x.pearson_correlation(&y).unwrap() - expected).abs() < 1e-10);

    let z = Sample::from(vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        x.covariance(&z),
        Err(Error::LengthMismatch { expected: 5, actual: 3 })
    ));
}

#[test]
fn test_degenerate_inputs() {
    let empty = Sample::default();
    assert!(matches!(empty.range(), Err(Error::EmptySample(_))));
    assert!(matches!(empty.mean(), Err(Error::EmptySample(_))));

    let single = Sample::from(vec![42.0]);
    assert!(matches!(single.mean_with(true), Err(Error::DivisionByZero(_))));
    assert!((single.range().unwrap()).abs() < 1e-10);
}

#[test]
fn test_round_trip() {
    let data = vec![0.1, 0.2, -0.3, 1e6, 42.0];
    let sample: Sample = data.iter().copied().collect();
    assert_eq!(sample.values(), data.as_slice());
    assert_eq!(sample.get(3), Some(1e6));
    assert_eq!(sample.get(5), None);
}

#[test]
fn test_describe_slice() {
    let summary = stats::describe([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(summary.count, 8);
    assert!((summary.mean - 5.0).abs() < 1e-10);
    assert!((summary.median - 4.5).abs() < 1e-10);
    assert!((summary.q1 - 4.0).abs() < 1e-10);
    assert!((summary.q3 - 6.0).abs() < 1e-10);
    assert!((summary.range - 7.0).abs() < 1e-10);
}
