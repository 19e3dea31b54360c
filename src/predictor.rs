//! Estimates the price for a mileage with the persisted coefficients.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::opts::PredictOpts;
use crate::prelude::*;
use crate::theta_store::ThetaStore;

pub fn run(store_path: &Path, opts: &PredictOpts) -> Result {
    let theta = ThetaStore::new(store_path).load();
    let mileage = match opts.mileage.as_slice() {
        [] => {
            println!("Please enter mileage of the car:");
            io::stdout().flush()?;
            let input = read_line(io::stdin().lock())?;
            parse_mileage(&input).context("doesn't look like a number of km")?
        }
        [argument] => parse_mileage(argument).context("the argument must be a number of km")?,
        _ => return Err(anyhow!("too many arguments, expected a single mileage")),
    };
    println!("Prediction is: {}", theta.estimate(mileage));
    if let Some(notice) = negative_mileage_notice(mileage) {
        tracing::debug!(mileage, "negative mileage");
        println!("{}", notice);
    }
    Ok(())
}

/// A negative mileage is accepted, but the user is told about it next to the prediction.
fn negative_mileage_notice(mileage: f64) -> Option<&'static str> {
    (mileage < 0.0).then_some("Are you sure the car has driven negative kilometers?")
}

fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Err(anyhow!("no mileage entered")),
        _ => Ok(line),
    }
}

fn parse_mileage(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>()? {
        mileage if mileage.is_finite() => Ok(mileage),
        mileage => Err(anyhow!("{} is not a finite number", mileage)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::trainer::theta::Theta;

    #[test]
    fn parse_mileage_ok() -> crate::Result {
        assert!((parse_mileage(" 42000\n")? - 42000.0).abs() < f64::EPSILON);
        assert!((parse_mileage("-1.5")? + 1.5).abs() < f64::EPSILON);
        assert!(parse_mileage("forty-two").is_err());
        assert!(parse_mileage("inf").is_err());
        assert!(parse_mileage("").is_err());
        Ok(())
    }

    #[test]
    fn read_line_ok() -> crate::Result {
        assert_eq!(read_line(Cursor::new("100\n200\n"))?, "100\n");
        assert!(read_line(Cursor::new("")).is_err());
        Ok(())
    }

    #[test]
    fn negative_mileage_notice_ok() {
        assert!(negative_mileage_notice(-100.0).is_some());
        assert!(negative_mileage_notice(0.0).is_none());
        assert!(negative_mileage_notice(50000.0).is_none());
    }

    #[test]
    fn negative_argument_predicts() -> crate::Result {
        let directory = tempfile::tempdir()?;
        let store_path = directory.path().join("thetas");
        ThetaStore::new(&store_path).save(Theta::new(8000.0, -0.02))?;
        let opts = PredictOpts {
            mileage: vec!["-100".to_string()],
        };
        run(&store_path, &opts)?;
        Ok(())
    }

    #[test]
    fn cold_store_predicts_zero() -> crate::Result {
        let directory = tempfile::tempdir()?;
        let opts = PredictOpts {
            mileage: vec!["1000".to_string()],
        };
        run(&directory.path().join("thetas"), &opts)?;
        Ok(())
    }

    #[test]
    fn too_many_arguments() -> crate::Result {
        let directory = tempfile::tempdir()?;
        let opts = PredictOpts {
            mileage: vec!["1".to_string(), "2".to_string()],
        };
        assert!(run(&directory.path().join("thetas"), &opts).is_err());
        Ok(())
    }

    #[test]
    fn non_numeric_argument() -> crate::Result {
        let directory = tempfile::tempdir()?;
        let opts = PredictOpts {
            mileage: vec!["far".to_string()],
        };
        let error = run(&directory.path().join("thetas"), &opts).unwrap_err();
        assert_eq!(error.to_string(), "the argument must be a number of km");
        Ok(())
    }
}
