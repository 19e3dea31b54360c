use std::process::ExitCode;

use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod dataset;
mod helpers;
mod normalizer;
mod opts;
mod prelude;
mod predictor;
mod render;
mod theta_store;
mod trainer;

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _sentry_guard = match helpers::tracing::init(opts.sentry_dsn.clone()) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("failed to initialise logging: {:#}", error);
            return ExitCode::FAILURE;
        }
    };

    match run(opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> Result {
    match opts.subcommand {
        Subcommand::Train(train_opts) => trainer::run(&opts.store, &train_opts),
        Subcommand::Predict(predict_opts) => predictor::run(&opts.store, &predict_opts),
    }
}
