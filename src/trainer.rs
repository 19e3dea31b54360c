//! Fits `price = θ₀ + θ₁ × mileage` with batch gradient descent over the normalized dataset.

use std::path::Path;
use std::time::Instant;

use crate::dataset::Dataset;
use crate::helpers::tracing::format_elapsed;
use crate::normalizer::normalize;
use crate::opts::TrainOpts;
use crate::prelude::*;
use crate::render;
use crate::theta_store::ThetaStore;
use crate::trainer::gradient_descent::{train, Hyperparameters};
use crate::trainer::loss::MSELoss;
use crate::trainer::theta::Theta;
use crate::trainer::trajectory::{normalize_theta, Trajectory};

pub mod gradient_descent;
pub mod loss;
pub mod theta;
pub mod trajectory;

pub fn run(store_path: &Path, opts: &TrainOpts) -> Result {
    let start_instant = Instant::now();
    let dataset = Dataset::load(&opts.data)?;
    let store = ThetaStore::new(store_path);

    let trajectory = fit(&dataset, &store, opts.warm_start, &opts.hyperparameters.into());
    let theta = trajectory.last();
    match store.save(theta) {
        Ok(_) => tracing::info!(path = %store.path().display(), "saved the coefficients"),
        Err(error) => {
            tracing::error!("{:#}, the coefficients are not saved", anyhow::Error::from(error))
        }
    }

    tracing::info!(
        initial_loss = MSELoss::of(&trajectory.first(), &dataset.mileage, &dataset.price),
        final_loss = MSELoss::of(&theta, &dataset.mileage, &dataset.price),
        n_iterations = trajectory.len() - 1,
        elapsed = format_elapsed(start_instant).as_str(),
        "trained",
    );
    println!("{}", theta);

    if let Err(error) = render::render(&dataset, &trajectory, &opts.plot_dir, &opts.into()) {
        tracing::error!("failed to render the plots: {:#}", error);
    }
    Ok(())
}

/// Normalizes the dataset, runs the descent, and returns the trajectory in the original scale.
pub fn fit(
    dataset: &Dataset,
    store: &ThetaStore,
    warm_start: bool,
    hyperparameters: &Hyperparameters,
) -> Trajectory {
    let mileage = normalize(&dataset.mileage);
    let price = normalize(&dataset.price);

    let initial = if warm_start {
        let theta = store.load();
        tracing::info!(theta0 = theta.theta0, theta1 = theta.theta1, "warm start");
        normalize_theta(theta, &price, &mileage)
    } else {
        Theta::default()
    };

    // A column without spread determines no slope, so only the intercept is trained.
    // The initial slope is folded into the intercept, which keeps the initial estimate.
    let (features, initial) = if mileage.has_spread() {
        (mileage.values.clone(), initial)
    } else {
        let constant = mileage.values.first().copied().unwrap_or_default();
        tracing::warn!(
            theta1 = initial.theta1,
            "the mileage is constant, fitting the intercept only and folding the slope into it",
        );
        let initial = Theta::new(initial.estimate(constant), 0.0);
        (vec![0.0; mileage.values.len()], initial)
    };

    train(&features, &price.values, initial, hyperparameters).denormalize(&price, &mileage)
}
