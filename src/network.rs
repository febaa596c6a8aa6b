//! The two-layer network model.
//!
//! Fixed shape: a bias-augmented scalar input `[1, x]`, one ReLU hidden layer,
//! and a single Identity output unit. Weights live in two matrices:
//!
//! - `w1`: `(inputs, hidden)` — row 0 is the bias row
//! - `w2`: `(hidden, outputs)`
//!
//! The bias row of `w1` is initialized uniformly over `[-100, 100]` while every
//! other weight starts in `[-1, 1]`. The wide bias range lets each hidden unit's
//! ReLU breakpoint land anywhere across the visible input domain instead of
//! clustering near the origin.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Activation, Error, Matrix, Result};

/// Layer sizes of the network.
///
/// `inputs` counts the constant-1 bias channel, so it must be 2 (bias + x);
/// `outputs` must be 1 (scalar prediction). `hidden` is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            inputs: 2,
            hidden: 60,
            outputs: 1,
        }
    }
}

impl Topology {
    pub fn validate(self) -> Result<()> {
        if self.inputs != 2 {
            return Err(Error::Shape(format!(
                "input layer must be 2 wide (bias + x), got {}",
                self.inputs
            )));
        }
        if self.hidden == 0 {
            return Err(Error::Shape("hidden layer must not be empty".to_owned()));
        }
        if self.outputs != 1 {
            return Err(Error::Shape(format!(
                "output layer must be a single unit, got {}",
                self.outputs
            )));
        }
        Ok(())
    }
}

/// Every intermediate of one forward pass.
///
/// The backward pass needs both pre-activation (`v1`, `v2`) and post-activation
/// (`y1`, `y2`) values, so the forward pass retains all of them.
#[derive(Debug, Clone)]
pub struct Forward {
    /// Bias-augmented input row vector `[1, x]`.
    pub input: Matrix,
    /// Hidden pre-activations, `1 x hidden`.
    pub v1: Matrix,
    /// Hidden post-activations `ReLU(v1)`.
    pub y1: Matrix,
    /// Output pre-activations, `1 x outputs`.
    pub v2: Matrix,
    /// Output post-activations `Identity(v2)`.
    pub y2: Matrix,
}

#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    w1: Matrix,
    w2: Matrix,
}

impl Network {
    /// Create a network with randomly initialized weights from a seed.
    pub fn new_with_seed(topology: Topology, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(topology, &mut rng)
    }

    /// Create a network with randomly initialized weights.
    pub fn new_with_rng<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> Result<Self> {
        topology.validate()?;

        let w1 = Matrix::build(topology.inputs, topology.hidden, |i, _| {
            if i == 0 {
                rng.gen_range(-100.0..100.0)
            } else {
                rng.gen_range(-1.0..1.0)
            }
        });
        let w2 = Matrix::build(topology.hidden, topology.outputs, |_, _| {
            rng.gen_range(-1.0..1.0)
        });

        Ok(Self { topology, w1, w2 })
    }

    /// Create a network from explicit weight matrices.
    ///
    /// Intended for deterministic setups (tests, known-good fixtures).
    pub fn from_weights(topology: Topology, w1: Matrix, w2: Matrix) -> Result<Self> {
        topology.validate()?;
        if w1.rows() != topology.inputs || w1.cols() != topology.hidden {
            return Err(Error::Shape(format!(
                "w1 is {}x{}, topology wants {}x{}",
                w1.rows(),
                w1.cols(),
                topology.inputs,
                topology.hidden
            )));
        }
        if w2.rows() != topology.hidden || w2.cols() != topology.outputs {
            return Err(Error::Shape(format!(
                "w2 is {}x{}, topology wants {}x{}",
                w2.rows(),
                w2.cols(),
                topology.hidden,
                topology.outputs
            )));
        }
        Ok(Self { topology, w1, w2 })
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    #[inline]
    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    /// Replace both weight matrices wholesale.
    ///
    /// The sweep engine computes the next weights from the pre-update matrices
    /// and then swaps them in here; nothing mutates a weight matrix in place.
    pub(crate) fn replace_weights(&mut self, w1: Matrix, w2: Matrix) {
        debug_assert_eq!((w1.rows(), w1.cols()), (self.w1.rows(), self.w1.cols()));
        debug_assert_eq!((w2.rows(), w2.cols()), (self.w2.rows(), self.w2.cols()));
        self.w1 = w1;
        self.w2 = w2;
    }

    /// Forward pass at a single input `x`, retaining every intermediate.
    pub fn forward(&self, x: f64) -> Result<Forward> {
        let input = Matrix::row_vector(&[1.0, x]);
        let v1 = input.mul(&self.w1)?;
        let y1 = v1.map(|z, _, _| Activation::ReLU.forward(z));
        let v2 = y1.mul(&self.w2)?;
        let y2 = v2.map(|z, _, _| Activation::Identity.forward(z));

        Ok(Forward {
            input,
            v1,
            y1,
            v2,
            y2,
        })
    }

    /// Scalar prediction at `x`. Pure: no state changes.
    pub fn predict(&self, x: f64) -> Result<f64> {
        let pass = self.forward(x)?;
        pass.y2.get(0, 0)
    }
}
