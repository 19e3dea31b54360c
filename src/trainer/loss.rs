use crate::trainer::theta::Theta;

/// Mean squared error accumulator.
#[derive(Default, Copy, Clone)]
pub struct MSELoss {
    loss: f64,
    n: usize,
}

impl MSELoss {
    #[must_use]
    pub fn of(theta: &Theta, mileage: &[f64], price: &[f64]) -> f64 {
        let mut loss = Self::default();
        for (mileage, price) in mileage.iter().zip(price) {
            loss.push_sample(theta.estimate(*mileage), *price);
        }
        loss.finalise()
    }

    #[inline]
    pub fn push_sample(&mut self, prediction: f64, label: f64) {
        let residual = prediction - label;
        self.loss += residual * residual;
        self.n += 1;
    }

    #[must_use]
    pub fn finalise(&self) -> f64 {
        self.loss / self.n.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_ok() {
        let loss = MSELoss::of(&Theta::new(1.0, 2.0), &[0.0, 1.0], &[0.0, 5.0]);
        assert!((loss - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_ok() {
        assert_eq!(MSELoss::default().finalise(), 0.0);
    }
}
