//! Sample moments
//!
//! Population (biased) moments of a sample: mean, variance, standard
//! deviation, median, skewness and excess kurtosis.

use serde::Serialize;

use crate::types::Sample;

/// Descriptive statistics of a sample
#[derive(Debug, Clone, Serialize)]
pub struct MomentSummary {
    /// Number of observations
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance, E[x^2] - mean^2
    pub variance: f64,
    /// Standard deviation
    pub std_dev: f64,
    /// Median of the sorted sample
    pub median: f64,
    /// Population skewness, m3 / std_dev^3 (NaN for a constant sample)
    pub skewness: f64,
    /// Population excess kurtosis, m4 / std_dev^4 - 3 (NaN for a constant sample)
    pub kurtosis: f64,
    pub min: f64,
    /// Maximum, the ML estimate of the upper bound theta
    pub max: f64,
}

/// Compute the moment summary of a sample
///
/// Variance divides by n, not n - 1. A sample of identical values has
/// variance and standard deviation exactly zero, and NaN skewness and
/// kurtosis instead of failing.
pub fn moments(sample: &Sample) -> MomentSummary {
    let data = sample.values();
    let n = data.len() as f64;

    let constant = data.iter().all(|&x| x == data[0]);
    let (mean, variance) = if constant {
        (data[0], 0.0)
    } else {
        let mean = data.iter().sum::<f64>() / n;
        let mean_sq = data.iter().map(|x| x * x).sum::<f64>() / n;
        (mean, mean_sq - mean * mean)
    };
    // E[x^2] - mean^2 can dip just below zero for near-constant data
    let std_dev = variance.max(0.0).sqrt();

    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &x in data {
        let d = x - mean;
        let d2 = d * d;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m3 /= n;
    m4 /= n;

    let (skewness, kurtosis) = if std_dev != 0.0 {
        (m3 / std_dev.powi(3), m4 / std_dev.powi(4) - 3.0)
    } else {
        (f64::NAN, f64::NAN)
    };

    tracing::debug!(m3, m4, std_dev, "central moments");

    MomentSummary {
        n: data.len(),
        mean,
        variance,
        std_dev,
        median: sample.median(),
        skewness,
        kurtosis,
        min: sample.min(),
        max: sample.max(),
    }
}
