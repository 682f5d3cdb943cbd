use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

use crate::core::error::{Error, Result};

/// Sample: an ordered, fixed-length sequence of observations
///
/// The sum of the observations and the parity of the size are computed on first
/// access and cached. The caches use `OnceCell`, so a `Sample` is `Send` but not
/// `Sync`; share it across threads behind a `Mutex` if concurrent reads are needed.
/// Only [`Sample::reset_cache`] and the crate's own mutating operations clear them.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    /// The observations, in insertion order
    values: Vec<f64>,
    /// Cached sum of the observations
    sum: OnceCell<f64>,
    /// Cached parity of the size
    size_even: OnceCell<bool>,
}

impl Sample {
    /// Create a new Sample from a sequence of observations
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            sum: OnceCell::new(),
            size_even: OnceCell::new(),
        }
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Sample has no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an observation at a specific index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get a reference to the observations
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Convert Sample to Vec
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Consume the Sample and return its observations
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Sum of the observations (cached)
    pub fn sum(&self) -> f64 {
        *self.sum.get_or_init(|| self.values.iter().sum())
    }

    /// Whether the number of observations is even (cached)
    pub fn is_size_even(&self) -> bool {
        *self.size_even.get_or_init(|| self.values.len() % 2 == 0)
    }

    /// Drop the cached sum and parity
    pub fn reset_cache(&mut self) {
        self.sum.take();
        self.size_even.take();
    }

    /// Return a copy sorted in ascending order
    ///
    /// NaN observations compare equal to everything, which leaves their
    /// position unspecified.
    pub fn sorted(&self) -> Sample {
        let mut values = self.values.clone();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Sample::new(values)
    }

    /// Raise each observation to `power`
    pub fn elementwise_power(&self, power: i32) -> Sample {
        self.values.iter().map(|v| v.powi(power)).collect()
    }

    /// Element-wise product with another Sample of the same length
    pub fn elementwise_product(&self, other: &Sample) -> Result<Sample> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .collect())
    }

    /// Keep only the observations matching `keep`, returning the removed ones in order.
    /// Clears the cached scalars when anything was removed.
    pub(crate) fn partition_retain<F>(&mut self, mut keep: F) -> Vec<f64>
    where
        F: FnMut(f64) -> bool,
    {
        let (kept, removed): (Vec<f64>, Vec<f64>) =
            self.values.iter().copied().partition(|&v| keep(v));

        if !removed.is_empty() {
            self.values = kept;
            self.reset_cache();
        }

        removed
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Sample::new(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Sample::new(values.to_vec())
    }
}

impl From<Vec<i64>> for Sample {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().map(|v| v as f64).collect()
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let data = vec![3.0, -1.5, 7.25, 0.0];
        let sample = Sample::new(data.clone());
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.values(), data.as_slice());
        assert_eq!(sample.into_vec(), data);
    }

    #[test]
    fn test_cached_scalars() {
        let mut sample = Sample::from(vec![1.0, 2.0, 3.0]);
        assert!((sample.sum() - 6.0).abs() < 1e-10);
        assert!(!sample.is_size_even());

        let removed = sample.partition_retain(|v| v < 3.0);
        assert_eq!(removed, vec![3.0]);
        assert!((sample.sum() - 3.0).abs() < 1e-10);
        assert!(sample.is_size_even());
    }

    #[test]
    fn test_reset_cache() {
        let mut sample = Sample::from(vec![1.0, 2.0]);
        assert!((sample.sum() - 3.0).abs() < 1e-10);
        sample.reset_cache();
        assert!(sample.sum.get().is_none());
        assert!((sample.sum() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sorted_leaves_original_order() {
        let sample = Sample::from(vec![3.0, 1.0, 2.0]);
        assert_eq!(sample.sorted().values(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_elementwise() {
        let a = Sample::from(vec![1.0, -2.0, 3.0]);
        let b = Sample::from(vec![2.0, 2.0, 2.0]);
        assert_eq!(a.elementwise_power(2).values(), &[1.0, 4.0, 9.0]);
        assert_eq!(a.elementwise_product(&b).unwrap().values(), &[2.0, -4.0, 6.0]);

        let short = Sample::from(vec![1.0]);
        assert!(matches!(
            a.elementwise_product(&short),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_display() {
        let sample = Sample::from(vec![1.0, 2.5]);
        assert_eq!(sample.to_string(), "[1, 2.5]");
    }
}
