use std::str::FromStr;

use crate::prelude::*;

pub fn iterations(value: &str) -> Result<usize> {
    match usize::from_str(value)? {
        value if value > 1 => Ok(value),
        _ => Err(anyhow!("number of iterations must be > 1")),
    }
}

pub fn learning_rate(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value > 0.0 && value < 1.0 => Ok(value),
        _ => Err(anyhow!("learning rate should be in range between 0.0 and 1.0")),
    }
}

pub fn tolerance(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value > 0.0 && value.is_finite() => Ok(value),
        _ => Err(anyhow!("expected a positive tolerance")),
    }
}
