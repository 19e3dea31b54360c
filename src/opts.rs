//! CLI options.

use std::path::PathBuf;

use clap::Parser;

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Theta persistence file
    #[arg(long, env = "LINREG_STORE", default_value = "thetas", global = true)]
    pub store: PathBuf,

    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Train(TrainOpts),
    Predict(PredictOpts),
}

/// Fits the model on the dataset and persists the coefficients
#[derive(clap::Args, Clone)]
pub struct TrainOpts {
    /// Input table: a header line followed by `mileage,price` rows
    #[arg(short, long, env = "LINREG_DATA", default_value = "data.csv")]
    pub data: PathBuf,

    /// Start from the persisted thetas (if any) instead of zeros
    #[arg(short, long)]
    pub warm_start: bool,

    #[command(flatten)]
    pub hyperparameters: HyperparameterOpts,

    /// Render the animated fitted-line graph
    #[arg(short, long)]
    pub animation: bool,

    /// Render the static fitted-line graph
    #[arg(short, long)]
    pub graph: bool,

    /// Render the θ₀ and θ₁ evolution animations
    #[arg(short, long)]
    pub thetas: bool,

    /// Directory for the rendered plots
    #[arg(long, env = "LINREG_PLOT_DIR", default_value = ".")]
    pub plot_dir: PathBuf,
}

/// Gradient descent options.
#[derive(clap::Args, Clone, Copy)]
pub struct HyperparameterOpts {
    /// Number of iterations, must be greater than 1
    #[arg(
        short,
        long,
        default_value = "1000",
        value_parser = parsers::iterations,
    )]
    pub iterations: usize,

    /// Learning rate, must lie strictly between 0.0 and 1.0
    #[arg(
        short,
        long,
        default_value = "0.1",
        value_parser = parsers::learning_rate,
    )]
    pub learning_rate: f64,

    /// Stop early once both coefficient updates fall below the tolerance
    #[arg(long, value_parser = parsers::tolerance)]
    pub tolerance: Option<f64>,
}

/// Estimates the price for a mileage using the persisted coefficients
#[derive(clap::Args)]
pub struct PredictOpts {
    /// Mileage, km. Prompted for on stdin when omitted
    #[arg(allow_hyphen_values = true)]
    pub mileage: Vec<String>,
}
