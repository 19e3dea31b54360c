//! Persists the trained coefficients as two lines of text: `θ₀` and then `θ₁`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::trainer::theta::Theta;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no `{}` file", .0.display())]
    NotFound(PathBuf),

    #[error("no access to file `{}`", .0.display())]
    PermissionDenied(PathBuf),

    #[error("`{}` does not contain two numbers: {reason}", .path.display())]
    InvalidValue { path: PathBuf, reason: String },

    #[error("failed to access `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct ThetaStore {
    path: PathBuf,
}

impl ThetaStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the stored coefficients.
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    pub fn save(&self, theta: Theta) -> Result<(), StoreError> {
        fs::write(&self.path, format!("{}\n{}\n", theta.theta0, theta.theta1))
            .map_err(|error| self.io_error(error))?;
        tracing::debug!(theta0 = theta.theta0, theta1 = theta.theta1, "saved");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    pub fn try_load(&self) -> Result<Theta, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|error| self.io_error(error))?;
        let mut lines = content.lines();
        let theta0 = self.parse_line(lines.next(), "θ₀")?;
        let theta1 = self.parse_line(lines.next(), "θ₁")?;
        Ok(Theta::new(theta0, theta1))
    }

    /// Loads the stored coefficients, falling back to zeros (cold start) on any failure.
    pub fn load(&self) -> Theta {
        match self.try_load() {
            Ok(theta) => theta,
            Err(error @ StoreError::NotFound(_)) => {
                tracing::debug!("{:#}, starting cold", error);
                Theta::default()
            }
            Err(error) => {
                tracing::info!("{:#}, starting cold", anyhow::Error::from(error));
                Theta::default()
            }
        }
    }

    fn parse_line(&self, line: Option<&str>, name: &str) -> Result<f64, StoreError> {
        let line = line.ok_or_else(|| StoreError::InvalidValue {
            path: self.path.clone(),
            reason: format!("{} is missing", name),
        })?;
        line.trim().parse().map_err(|error| StoreError::InvalidValue {
            path: self.path.clone(),
            reason: format!("{} `{}`: {}", name, line, error),
        })
    }

    fn io_error(&self, error: io::Error) -> StoreError {
        match error.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(self.path.clone()),
            _ => StoreError::Io {
                path: self.path.clone(),
                source: error,
            },
        }
    }
}
