use serde::Serialize;

use crate::errors::{StatsError, StatsResult};

/// An ordered, non-empty sequence of finite observations
///
/// Row order from the source is preserved; the runs test and the
/// Mann-Whitney halves both depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Build a sample from already-coerced values
    ///
    /// Rejects empty input and any non-finite value.
    pub fn new(values: Vec<f64>) -> StatsResult<Self> {
        if values.is_empty() {
            return Err(StatsError::InvalidInput("Sample cannot be empty".into()));
        }
        if let Some(pos) = values.iter().position(|x| !x.is_finite()) {
            return Err(StatsError::InvalidInput(format!(
                "Sample value at position {} is not finite: {}",
                pos, values[pos]
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sorted copy of the values; the sample itself keeps row order
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Median of the sorted copy (mean of the two middle values for even n)
    pub fn median(&self) -> f64 {
        let sorted = self.sorted();
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Split at `n / 2`: the second half is one longer when n is odd
    pub fn halves(&self) -> (&[f64], &[f64]) {
        self.values.split_at(self.values.len() / 2)
    }

    pub fn head(&self, count: usize) -> &[f64] {
        &self.values[..count.min(self.values.len())]
    }

    pub fn summary(&self) -> SampleSummary {
        SampleSummary {
            n: self.len(),
            min: self.min(),
            max: self.max(),
            head: self.head(5).to_vec(),
        }
    }
}

/// Short description of a loaded sample
#[derive(Debug, Clone, Serialize)]
pub struct SampleSummary {
    /// Number of observations
    pub n: usize,
    pub min: f64,
    pub max: f64,
    /// First five observations in row order
    pub head: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rejects_empty() {
        assert!(Sample::new(vec![]).is_err());
    }

    #[test]
    fn test_sample_rejects_non_finite() {
        assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
        assert!(Sample::new(vec![f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_median_odd_and_even() {
        let odd = Sample::new(vec![5.0, 1.0, 3.0]).unwrap();
        assert_eq!(odd.median(), 3.0);

        let even = Sample::new(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(even.median(), 2.5);
    }

    #[test]
    fn test_median_is_idempotent_and_keeps_order() {
        let sample = Sample::new(vec![9.0, -1.0, 4.0, 4.0, 0.5, 7.0]).unwrap();
        let first = sample.median();
        let second = sample.median();
        assert_eq!(first, second);
        assert_eq!(sample.values(), &[9.0, -1.0, 4.0, 4.0, 0.5, 7.0]);
    }

    #[test]
    fn test_halves_odd_length() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let (first, second) = sample.halves();
        assert_eq!(first, &[1.0, 2.0]);
        assert_eq!(second, &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_summary_head_is_capped() {
        let sample = Sample::new((1..=8).map(f64::from).collect()).unwrap();
        let summary = sample.summary();
        assert_eq!(summary.n, 8);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 8.0);
        assert_eq!(summary.head, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let short = Sample::new(vec![2.0, 1.0]).unwrap();
        assert_eq!(short.summary().head, vec![2.0, 1.0]);
    }
}
