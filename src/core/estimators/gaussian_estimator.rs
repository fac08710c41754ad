use serde::{Deserialize, Serialize};

/// Normal distribution fixed at training time: one per (class, feature)
/// pair in a Gaussian naive Bayes artifact.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussianEstimator {
    mean: f64,
    variance: f64,
}

impl GaussianEstimator {
    pub fn from_moments(mean: f64, variance: f64) -> Self {
        Self {
            mean,
            variance: variance.max(0.0),
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn get_variance(&self) -> f64 {
        self.variance
    }

    pub fn get_std_dev(&self) -> f64 {
        self.get_variance().sqrt()
    }

    pub fn probability_density(&self, value: f64) -> f64 {
        let normal_const: f64 = (2.0 * std::f64::consts::PI).sqrt();
        let std_dev = self.get_std_dev();
        if std_dev > 0.0 {
            let diff = value - self.mean;
            return (1.0 / (normal_const * std_dev))
                * ((-diff * diff) / (2.0 * std_dev * std_dev)).exp();
        }
        if (value - self.mean).abs() == 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Natural log of the density. Degenerate (zero variance) estimators
    /// return 0 at the mean and negative infinity elsewhere.
    pub fn log_density(&self, value: f64) -> f64 {
        if self.variance > 0.0 {
            let diff = value - self.mean;
            -0.5 * ((2.0 * std::f64::consts::PI * self.variance).ln()
                + diff * diff / self.variance)
        } else if (value - self.mean).abs() == 0.0 {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianEstimator;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn standard_normal_density_at_mean() {
        let g = GaussianEstimator::from_moments(0.0, 1.0);
        let expected = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!(approx_eq(g.probability_density(0.0), expected, EPS));
        assert!(approx_eq(g.get_std_dev(), 1.0, EPS));
    }

    #[test]
    fn log_density_matches_density() {
        let g = GaussianEstimator::from_moments(130.0, 300.0);
        for x in [90.0, 130.0, 171.5] {
            assert!(approx_eq(
                g.log_density(x),
                g.probability_density(x).ln(),
                1e-9
            ));
        }
    }

    #[test]
    fn negative_variance_is_clamped() {
        let g = GaussianEstimator::from_moments(2.0, -1.0);
        assert!(approx_eq(g.get_variance(), 0.0, EPS));
    }

    #[test]
    fn zero_variance_is_spike_at_mean() {
        let g = GaussianEstimator::from_moments(10.0, 0.0);
        assert!(approx_eq(g.probability_density(10.0), 1.0, 1e-12));
        assert!(approx_eq(g.probability_density(9.999999999), 0.0, 1e-12));
        assert_eq!(g.log_density(10.0), 0.0);
        assert_eq!(g.log_density(11.0), f64::NEG_INFINITY);
    }
}
