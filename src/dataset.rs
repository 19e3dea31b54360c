//! Reads the `mileage,price` table.

use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

/// Two parallel, equal-length columns of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub mileage: Vec<f64>,
    pub price: Vec<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no `{0}` file")]
    NotFound(String),

    #[error("no access to file `{0}`")]
    PermissionDenied(String),

    #[error("failed to read `{path}`")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("the dataset is empty")]
    EmptySource,

    #[error("line {line}: there must be exactly 2 numbers per line, found {n_fields} field(s)")]
    MalformedRow { line: u64, n_fields: usize },

    #[error("line {line}: the data should contain only numbers, found `{value}`")]
    NonNumericValue { line: u64, value: String },

    #[error("no data in the dataset")]
    NoUsableData,

    #[error("failed to parse the dataset")]
    Csv(#[from] csv::Error),
}

impl Dataset {
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let display_path = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(display_path.clone()),
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied(display_path.clone()),
            _ => LoadError::Io {
                path: display_path.clone(),
                source: error,
            },
        })?;
        let dataset = Self::parse(&text)?;
        tracing::info!(n_samples = dataset.len(), "loaded");
        Ok(dataset)
    }

    /// Parses the table. The first line is a header and is ignored.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        if text.lines().skip(1).all(|line| line.trim().is_empty()) {
            return Err(LoadError::EmptySource);
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(text.as_bytes());

        let mut mileage = Vec::new();
        let mut price = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |position| position.line());
            if record.len() != 2 {
                return Err(LoadError::MalformedRow {
                    line,
                    n_fields: record.len(),
                });
            }
            mileage.push(parse_field(&record[0], line)?);
            price.push(parse_field(&record[1], line)?);
        }

        match mileage.is_empty() {
            false => Ok(Self { mileage, price }),
            true => Err(LoadError::NoUsableData),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mileage.len()
    }
}

fn parse_field(value: &str, line: u64) -> Result<f64, LoadError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(LoadError::NonNumericValue {
            line,
            value: value.to_string(),
        }),
    }
}
