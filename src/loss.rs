//! Squared-error loss.
//!
//! Used both to report the per-sweep mean error and to seed backpropagation:
//!
//! - run `network.forward(x)`
//! - seed the backward pass with [`squared_error_grad`]
//! - accumulate [`squared_error`] for the mean-loss readout

/// Squared error: `(pred - target)^2 / 2`.
#[inline]
pub fn squared_error(pred: f64, target: f64) -> f64 {
    let diff = pred - target;
    0.5 * diff * diff
}

/// Derivative of [`squared_error`] with respect to `pred`: `pred - target`.
#[inline]
pub fn squared_error_grad(pred: f64, target: f64) -> f64 {
    pred - target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_half_squared_difference() {
        assert_eq!(squared_error(3.0, 1.0), 2.0);
        assert_eq!(squared_error(1.0, 3.0), 2.0);
        assert_eq!(squared_error(5.0, 5.0), 0.0);
    }

    #[test]
    fn grad_is_signed_difference() {
        assert_eq!(squared_error_grad(3.0, 1.0), 2.0);
        assert_eq!(squared_error_grad(1.0, 3.0), -2.0);
    }

    #[test]
    fn grad_matches_numeric_derivative() {
        let (pred, target) = (0.7, -0.3);
        let eps = 1e-6;
        let numeric = (squared_error(pred + eps, target) - squared_error(pred - eps, target))
            / (2.0 * eps);
        assert!((squared_error_grad(pred, target) - numeric).abs() < 1e-6);
    }
}
