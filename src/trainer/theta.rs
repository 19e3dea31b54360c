use std::fmt::{Display, Formatter};

/// Coefficients of the affine model `price = θ₀ + θ₁ × mileage`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Theta {
    /// Intercept.
    pub theta0: f64,

    /// Slope.
    pub theta1: f64,
}

impl Theta {
    #[must_use]
    pub const fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    #[must_use]
    #[inline]
    pub fn estimate(&self, mileage: f64) -> f64 {
        self.theta0 + self.theta1 * mileage
    }
}

impl Display for Theta {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "θ₀ = {}, θ₁ = {}", self.theta0, self.theta1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_ok() {
        let theta = Theta::new(8500.0, -0.02);
        assert!((theta.estimate(100_000.0) - 6500.0).abs() < 1e-9);
        assert_eq!(Theta::default().estimate(42.0), 0.0);
    }
}
