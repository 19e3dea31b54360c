//! Batch gradient descent on the mean squared error.

use crate::trainer::theta::Theta;
use crate::trainer::trajectory::Trajectory;

#[derive(Debug, Copy, Clone)]
pub struct Hyperparameters {
    pub iterations: usize,
    pub learning_rate: f64,

    /// Stop once both coefficient updates are smaller than this, if set.
    pub tolerance: Option<f64>,
}

impl From<crate::opts::HyperparameterOpts> for Hyperparameters {
    fn from(opts: crate::opts::HyperparameterOpts) -> Self {
        Self {
            iterations: opts.iterations,
            learning_rate: opts.learning_rate,
            tolerance: opts.tolerance,
        }
    }
}

/// Runs the descent over the normalized columns, starting from `initial`.
///
/// Both gradients are taken at the current coefficients before either of them is updated.
/// No guard against divergence: an excessive learning rate yields unbounded or `NaN` coefficients.
#[tracing::instrument(
    skip_all,
    fields(
        n_samples = mileage.len(),
        iterations = hyperparameters.iterations,
        learning_rate = hyperparameters.learning_rate,
    ),
)]
pub fn train(
    mileage: &[f64],
    price: &[f64],
    initial: Theta,
    hyperparameters: &Hyperparameters,
) -> Trajectory {
    debug_assert_eq!(mileage.len(), price.len());

    let n_samples = mileage.len().max(1) as f64;
    let mut theta = initial;
    let mut trajectory = Trajectory::with_capacity(initial, hyperparameters.iterations);

    for iteration in 1..=hyperparameters.iterations {
        let (mut gradient0, mut gradient1) = (0.0, 0.0);
        for (mileage, price) in mileage.iter().zip(price) {
            let residual = theta.estimate(*mileage) - price;
            gradient0 += residual;
            gradient1 += residual * mileage;
        }
        let step0 = hyperparameters.learning_rate * gradient0 / n_samples;
        let step1 = hyperparameters.learning_rate * gradient1 / n_samples;

        theta.theta0 -= step0;
        theta.theta1 -= step1;
        trajectory.push(theta);

        if let Some(tolerance) = hyperparameters.tolerance {
            if step0.abs() < tolerance && step1.abs() < tolerance {
                tracing::debug!(iteration, "converged");
                break;
            }
        }
    }

    trajectory
}
