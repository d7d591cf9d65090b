//! Statistical hypothesis testing
//!
//! Hand-rolled tests over a [`Sample`](crate::Sample): the runs test for
//! randomness, a chi-square goodness-of-fit against the quadratic CDF
//! family, and Mann-Whitney U between the two halves of the sample.


use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided p-value of a standard normal z-statistic
fn normal_two_sided_p(z: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(dist) => 2.0 * dist.sf(z.abs()),
        Err(_) => f64::NAN,
    }
}

/// Whether `|z|` falls outside the critical value
///
/// NaN never rejects.
fn exceeds_critical(z: f64, critical_value: f64) -> bool {
    z.abs() > critical_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normal_two_sided_p() {
        assert_abs_diff_eq!(normal_two_sided_p(0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_two_sided_p(1.959964), 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_two_sided_p(-1.959964), 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_two_sided_p(2.575829), 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_exceeds_critical() {
        assert!(exceeds_critical(-2.0, 1.96));
        assert!(!exceeds_critical(1.96, 1.96));
        assert!(!exceeds_critical(f64::NAN, 1.96));
    }
}
