//! Plots of the finished training run, written as standalone SVG files.

use std::fs;
use std::path::Path;

use maud::Render;

use crate::dataset::Dataset;
use crate::opts::TrainOpts;
use crate::prelude::*;
use crate::render::evolution::Evolution;
use crate::render::graph::Graph;
use crate::trainer::trajectory::Trajectory;

pub mod chart;
pub mod evolution;
pub mod graph;

/// Which plots to render.
#[derive(Default, Copy, Clone)]
pub struct Plots {
    pub graph: bool,
    pub animation: bool,
    pub thetas: bool,
}

impl From<&TrainOpts> for Plots {
    fn from(opts: &TrainOpts) -> Self {
        Self {
            graph: opts.graph,
            animation: opts.animation,
            thetas: opts.thetas,
        }
    }
}

pub fn render(
    dataset: &Dataset,
    trajectory: &Trajectory,
    directory: &Path,
    plots: &Plots,
) -> Result {
    if plots.graph || plots.animation {
        let graph = Graph {
            dataset,
            trajectory,
            animated: plots.animation,
        };
        write(&directory.join("graph.svg"), &graph)?;
    }
    if plots.thetas {
        let theta0: Vec<f64> = trajectory.thetas().iter().map(|theta| theta.theta0).collect();
        let theta1: Vec<f64> = trajectory.thetas().iter().map(|theta| theta.theta1).collect();
        let evolution = Evolution {
            index: "₀",
            values: &theta0,
        };
        write(&directory.join("theta0.svg"), &evolution)?;
        let evolution = Evolution {
            index: "₁",
            values: &theta1,
        };
        write(&directory.join("theta1.svg"), &evolution)?;
    }
    Ok(())
}

fn write(path: &Path, plot: &impl Render) -> Result {
    fs::write(path, plot.render().into_string())
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    tracing::info!(path = %path.display(), "rendered");
    Ok(())
}

/// Picks at most `limit` evenly spaced items (plus the last one), along with their indices.
pub fn subsample<T>(items: &[T], limit: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
    let limit = limit.max(1);
    let step = ((items.len() + limit - 1) / limit).max(1);
    let last_index = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .filter(move |(index, _)| index % step == 0 || *index == last_index)
}
