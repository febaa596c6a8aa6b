//! Online backprop curve fitting.
//!
//! `curvefit` is a small, from-scratch trainer for a two-layer dense network
//! (bias-augmented scalar input, ReLU hidden layer, Identity scalar output)
//! fitted to a growing set of 2D points by per-sample stochastic gradient
//! descent under squared-error loss. It is the numeric core behind a
//! click-to-place-points curve-fitting surface; rendering, pointer input, and
//! timers are the host's business.
//!
//! # Design goals
//!
//! - Small, readable matrix algebra: [`Matrix`] is an immutable value object,
//!   every operation returns a fresh matrix.
//! - Clear contracts: shapes and indices are validated at the API boundary and
//!   surface as [`Error::Shape`] / [`Error::Index`].
//! - Deterministic when asked: every stochastic constructor and the sweep
//!   engine take a seed or an `Rng`, so runs are reproducible in tests.
//! - Synchronous core: one sweep is one plain function call; periodic
//!   scheduling lives behind the [`Scheduler`] seam.
//!
//! # Quick start
//!
//! ```rust
//! use curvefit::{Session, SweepConfig, Topology};
//!
//! # fn main() -> curvefit::Result<()> {
//! let mut session = Session::new_with_seed(Topology::default(), SweepConfig::default(), 0)?;
//!
//! // The host appends points as the user places them.
//! session.add_point(-1.0, -1.0);
//! session.add_point(0.0, 0.0);
//! session.add_point(1.0, 1.0);
//!
//! session.start();
//! for _ in 0..50 {
//!     session.tick()?;
//! }
//!
//! // The host samples predictions to trace the fitted curve.
//! let _y = session.evaluate(0.5)?;
//! let _err = session.mean_error();
//! # Ok(())
//! # }
//! ```
//!
//! # Driving sweeps yourself
//!
//! The engine is a method on [`Network`] and stateless between calls:
//!
//! ```rust
//! use curvefit::{Network, Point, Topology};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> curvefit::Result<()> {
//! let mut net = Network::new_with_seed(Topology::default(), 0)?;
//! let points = [Point::new(-1.0, -1.0), Point::new(1.0, 1.0)];
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let mean = net.train_sweep(&points, 1e-6, &mut rng)?;
//! assert!(mean.is_some());
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod error;
pub mod loss;
pub mod matrix;
pub mod network;
pub mod scheduler;
pub mod session;
pub mod train;

pub use activation::Activation;
pub use error::{Error, Result};
pub use loss::{squared_error, squared_error_grad};
pub use matrix::Matrix;
pub use network::{Forward, Network, Topology};
pub use scheduler::{ManualScheduler, Scheduler};
pub use session::Session;
pub use train::{Point, SweepConfig};
