//! Online backpropagation sweeps.
//!
//! A sweep is one full pass over the current point set in freshly shuffled
//! order, applying a stochastic-gradient update immediately after every sample.
//! Updates are sequential: each point sees the weights as left by the previous
//! point, and the per-sample loss is measured against the weights as they stood
//! entering that sample.
//!
//! The engine is stateless between calls. Stopping (the error threshold) is the
//! caller's job; see [`crate::Session`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::loss::{squared_error, squared_error_grad};
use crate::{Activation, Network, Result};

/// A single 2D training sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sweep hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Fixed per-sample step size. Deliberately tiny: the bias row's wide
    /// initialization range makes gradients large.
    pub learning_rate: f64,
    /// Mean error below which the session stops scheduling further sweeps.
    pub error_threshold: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-6,
            error_threshold: 10.0,
        }
    }
}

impl Network {
    /// Run one online-backpropagation sweep over `points`.
    ///
    /// Returns the mean per-sample squared error, or `None` for an empty point
    /// set (a no-op sweep: weights are left untouched).
    ///
    /// Weight matrices are never mutated in place; each sample computes fresh
    /// `w1`/`w2` from the pre-update matrices and swaps both in before the next
    /// sample.
    pub fn train_sweep<R: Rng + ?Sized>(
        &mut self,
        points: &[Point],
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Option<f64>> {
        assert!(
            learning_rate.is_finite() && learning_rate > 0.0,
            "learning rate must be finite and > 0"
        );

        if points.is_empty() {
            return Ok(None);
        }

        let mut order: Vec<usize> = (0..points.len()).collect();
        order.shuffle(rng);

        let mut total = 0.0;
        for &idx in &order {
            let Point { x: px, y: py } = points[idx];
            let pass = self.forward(px)?;

            // Output layer: delta2[k] = E'(y2[0,k], t) * Identity'(v2[0,k]).
            let new_w2 = self.w2().map(|w, j, k| {
                let delta2 = squared_error_grad(pass.y2.at(0, k), py)
                    * Activation::Identity.grad(pass.v2.at(0, k));
                w - learning_rate * delta2 * pass.y1.at(0, j)
            });

            // Hidden layer, chained through the single output unit (k = 0):
            // delta1[j] = delta2 * w2[j,0] * ReLU'(v1[0,j]), against the
            // pre-update w2.
            let new_w1 = self.w1().map(|w, i, j| {
                let delta2 = squared_error_grad(pass.y2.at(0, 0), py)
                    * Activation::Identity.grad(pass.v2.at(0, 0));
                let delta1 =
                    delta2 * self.w2().at(j, 0) * Activation::ReLU.grad(pass.v1.at(0, j));
                w - learning_rate * delta1 * pass.input.at(0, i)
            });

            total += squared_error(pass.y2.at(0, 0), py);
            self.replace_weights(new_w1, new_w2);
        }

        Ok(Some(total / points.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Topology};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture(hidden: usize, weight: f64) -> Network {
        let topology = Topology {
            hidden,
            ..Topology::default()
        };
        let w1 = Matrix::zeros(2, hidden).fill(weight);
        let w2 = Matrix::zeros(hidden, 1).fill(weight);
        Network::from_weights(topology, w1, w2).unwrap()
    }

    #[test]
    fn empty_sweep_is_a_no_op() {
        let mut net = Network::new_with_seed(Topology::default(), 1).unwrap();
        let (w1, w2) = (net.w1().clone(), net.w2().clone());

        let mut rng = StdRng::seed_from_u64(0);
        let mean = net.train_sweep(&[], 1e-6, &mut rng).unwrap();

        assert!(mean.is_none());
        assert_eq!(net.w1(), &w1);
        assert_eq!(net.w2(), &w2);
    }

    #[test]
    fn sweep_never_changes_weight_shapes() {
        let mut net = Network::new_with_seed(Topology::default(), 2).unwrap();
        let points = [Point::new(-1.0, 2.0), Point::new(0.5, -3.0)];
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..5 {
            net.train_sweep(&points, 1e-6, &mut rng).unwrap();
            assert_eq!((net.w1().rows(), net.w1().cols()), (2, 60));
            assert_eq!((net.w2().rows(), net.w2().cols()), (60, 1));
        }
    }

    #[test]
    fn single_point_sweep_decreases_the_loss() {
        // Deterministic fixture: every weight 0.01, one point (1, 5).
        let mut net = fixture(60, 0.01);
        let point = Point::new(1.0, 5.0);

        let before = squared_error(net.predict(1.0).unwrap(), 5.0);
        let mut rng = StdRng::seed_from_u64(0);
        net.train_sweep(&[point], 1e-4, &mut rng).unwrap();
        let after = squared_error(net.predict(1.0).unwrap(), 5.0);

        assert!(
            after < before,
            "loss did not decrease: before={before} after={after}"
        );
    }

    #[test]
    fn reported_error_uses_pre_update_weights() {
        // One point: the returned mean must equal the loss of the prediction
        // made before this sweep's update.
        let mut net = fixture(10, 0.01);
        let point = Point::new(1.0, 5.0);
        let expected = squared_error(net.predict(1.0).unwrap(), 5.0);

        let mut rng = StdRng::seed_from_u64(0);
        let mean = net.train_sweep(&[point], 1e-4, &mut rng).unwrap().unwrap();
        assert!((mean - expected).abs() < 1e-12);
    }

    #[test]
    fn sweeps_are_deterministic_under_a_fixed_seed() {
        let points = [
            Point::new(-1.0, -1.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        ];

        let mut a = Network::new_with_seed(Topology::default(), 11).unwrap();
        let mut rng_a = StdRng::seed_from_u64(5);
        let err_a = a.train_sweep(&points, 1e-6, &mut rng_a).unwrap();

        let mut b = Network::new_with_seed(Topology::default(), 11).unwrap();
        let mut rng_b = StdRng::seed_from_u64(5);
        let err_b = b.train_sweep(&points, 1e-6, &mut rng_b).unwrap();

        assert_eq!(err_a, err_b);
        assert_eq!(a.w1(), b.w1());
        assert_eq!(a.w2(), b.w2());
    }

    #[test]
    fn hand_computed_single_sample_update() {
        // Two hidden units, all weights 0.1, point (1, 1):
        // v1 = [0.2, 0.2], y1 = v1, y2 = 0.04, delta2 = -0.96.
        // w2 update: 0.1 + lr * 0.96 * 0.2
        // w1 update: delta1 = -0.96 * 0.1 * 1 = -0.096; w += lr * 0.096 * input
        let mut net = fixture(2, 0.1);
        let lr = 0.01;
        let mut rng = StdRng::seed_from_u64(0);
        net.train_sweep(&[Point::new(1.0, 1.0)], lr, &mut rng)
            .unwrap();

        let expected_w2 = 0.1 + lr * 0.96 * 0.2;
        assert!((net.w2().get(0, 0).unwrap() - expected_w2).abs() < 1e-12);

        let expected_w1 = 0.1 + lr * 0.096;
        for i in 0..2 {
            for j in 0..2 {
                assert!((net.w1().get(i, j).unwrap() - expected_w1).abs() < 1e-12);
            }
        }
    }

    #[test]
    #[should_panic]
    fn non_positive_learning_rate_is_rejected() {
        let mut net = fixture(2, 0.1);
        let mut rng = StdRng::seed_from_u64(0);
        let _ = net.train_sweep(&[Point::new(0.0, 0.0)], 0.0, &mut rng);
    }
}
