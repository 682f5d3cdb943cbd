//! # statkit
//!
//! Descriptive statistics and one-sample z-tests for small, in-memory samples.
//!
//! ```rust
//! use statkit::{DescriptiveStatistics, Sample, TailDirection, ZTestConfig};
//!
//! let mut sample = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
//! let removed = sample.remove_outliers_iqr(1.5).unwrap();
//! assert_eq!(removed, vec![100.0]);
//!
//! let config = ZTestConfig::new().with_direction(TailDirection::RightTailed);
//! let result = statkit::one_sample_z_test(&sample, 2.0, &config).unwrap();
//! println!("z = {}, p = {}", result.statistic, result.p_value);
//! ```

// Core module with fundamental data structures
pub mod core;

// Statistics, configuration and input
pub mod config;
pub mod io;
pub mod stats;

// Re-export core types
pub use crate::core::error::{Error, Result};
pub use crate::core::sample::Sample;

// Re-export statistics API
pub use stats::descriptive::{describe, DescriptiveStatistics, DescriptiveSummary, Mode};
pub use stats::hypothesis::{
    one_sample_z_test, z_test_summary, TailDirection, TestResult, ZTestConfig, ZTestSummary,
};
pub use stats::report::ZTestReport;

pub use config::StatkitConfig;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
