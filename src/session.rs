//! Training session: the surface the host (renderer, input handler, timer)
//! talks to.
//!
//! A `Session` owns the network, the growing point set, the last reported mean
//! error, and the running flag. The host appends points as the user places
//! them, drives [`Session::tick`] from its scheduler while training runs, and
//! samples [`Session::evaluate`] across the visible domain to draw the fitted
//! curve.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Network, Point, Result, SweepConfig, Topology};

#[derive(Debug)]
pub struct Session {
    network: Network,
    points: Vec<Point>,
    mean_error: Option<f64>,
    running: bool,
    config: SweepConfig,
    rng: StdRng,
}

impl Session {
    /// Create a session with entropy-seeded randomness.
    pub fn new(topology: Topology, config: SweepConfig) -> Result<Self> {
        Self::with_rng(topology, config, StdRng::from_entropy())
    }

    /// Create a fully deterministic session.
    pub fn new_with_seed(topology: Topology, config: SweepConfig, seed: u64) -> Result<Self> {
        Self::with_rng(topology, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(topology: Topology, config: SweepConfig, mut rng: StdRng) -> Result<Self> {
        let network = Network::new_with_rng(topology, &mut rng)?;
        Ok(Self {
            network,
            points: Vec::new(),
            mean_error: None,
            running: false,
            config,
            rng,
        })
    }

    /// Throw away the trained weights and the point set.
    ///
    /// Draws fresh random weights, clears all points and the reported error,
    /// and stops training.
    pub fn reset(&mut self) -> Result<()> {
        self.network = Network::new_with_rng(self.network.topology(), &mut self.rng)?;
        self.points.clear();
        self.mean_error = None;
        self.running = false;
        Ok(())
    }

    /// Append one training point.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    /// Read-only snapshot of the point set, in append order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Run one sweep over the current points and record the mean error.
    ///
    /// Returns `None` without touching the weights when no points exist. Once
    /// the mean error falls below the configured threshold the session stops
    /// itself; the engine stays free of stopping policy.
    pub fn train_one_sweep(&mut self) -> Result<Option<f64>> {
        let mean = self
            .network
            .train_sweep(&self.points, self.config.learning_rate, &mut self.rng)?;

        if let Some(err) = mean {
            debug!("sweep error: {err:.4e}");
            self.mean_error = Some(err);
            if err < self.config.error_threshold {
                self.running = false;
            }
        }

        Ok(mean)
    }

    /// Scalar prediction at `x`, for tracing the fitted curve. Pure.
    #[inline]
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.network.predict(x)
    }

    /// Mean error of the most recent completed sweep, if any.
    #[inline]
    pub fn mean_error(&self) -> Option<f64> {
        self.mean_error
    }

    /// Mark the session as running. A no-op if already running.
    #[inline]
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Mark the session as stopped; future ticks become no-ops.
    #[inline]
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Scheduler callback body: one sweep, but only while running.
    pub fn tick(&mut self) -> Result<()> {
        if self.running {
            self.train_one_sweep()?;
        }
        Ok(())
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }
}
