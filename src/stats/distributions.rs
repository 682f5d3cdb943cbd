//! Statistical probability distributions
//!
//! The standard normal distribution used by the z-test, delegating the numeric
//! work to `statrs`.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::core::error::{Error, Result};

/// Trait for continuous probability distributions
pub trait Distribution {
    /// Probability density function (PDF)
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function (CDF)
    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF (quantile function)
    ///
    /// Fails with [`Error::InvalidArgument`] when `p` is outside `[0, 1]`.
    fn inverse_cdf(&self, p: f64) -> Result<f64>;
}

/// Standard normal distribution N(0,1)
#[derive(Debug, Clone)]
pub struct StandardNormal {
    inner: Normal,
}

impl StandardNormal {
    pub fn new() -> Result<Self> {
        let inner = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("Invalid normal parameters: {}", e)))?;
        Ok(Self { inner })
    }
}

impl Distribution for StandardNormal {
    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn inverse_cdf(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidArgument(format!(
                "Probability must be in [0, 1], got {}",
                p
            )));
        }
        Ok(self.inner.inverse_cdf(p))
    }
}
