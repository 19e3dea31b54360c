use crate::normalizer::Normalized;
use crate::trainer::theta::Theta;

/// Coefficients after every iteration, preceded by the initial ones. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory(Vec<Theta>);

impl Trajectory {
    #[must_use]
    pub fn new(initial: Theta, rest: impl IntoIterator<Item = Theta>) -> Self {
        Self(std::iter::once(initial).chain(rest).collect())
    }

    #[must_use]
    pub fn with_capacity(initial: Theta, n_iterations: usize) -> Self {
        let mut thetas = Vec::with_capacity(n_iterations + 1);
        thetas.push(initial);
        Self(thetas)
    }

    pub fn push(&mut self, theta: Theta) {
        self.0.push(theta);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn first(&self) -> Theta {
        self.0[0]
    }

    #[must_use]
    pub fn last(&self) -> Theta {
        self.0[self.0.len() - 1]
    }

    #[must_use]
    pub fn thetas(&self) -> &[Theta] {
        &self.0
    }

    /// Maps the coefficients back to the original scale.
    #[must_use]
    pub fn denormalize(&self, price: &Normalized, mileage: &Normalized) -> Self {
        let (price_divisor, mileage_divisor) = (price.divisor(), mileage.divisor());
        Self(
            self.0
                .iter()
                .map(|theta| Theta {
                    theta0: theta.theta0 * price_divisor,
                    theta1: theta.theta1 * price_divisor / mileage_divisor,
                })
                .collect(),
        )
    }
}

/// Converts original-scale coefficients into the normalized space, the inverse of
/// [`Trajectory::denormalize`].
#[must_use]
pub fn normalize_theta(theta: Theta, price: &Normalized, mileage: &Normalized) -> Theta {
    let (price_divisor, mileage_divisor) = (price.divisor(), mileage.divisor());
    Theta {
        theta0: theta.theta0 / price_divisor,
        theta1: theta.theta1 * mileage_divisor / price_divisor,
    }
}
