//! Montepi - A terminal-based Monte Carlo estimator of π.
//!
//! Montepi draws uniform random points in the square [-1, 1]², classifies
//! each against the inscribed unit circle, and maintains the running
//! estimate 4·inside/N, visualized live in the terminal: a scatter panel
//! of the cumulative sample cloud next to a curve panel of the estimate
//! converging towards π.
//!
//! # Features
//!
//! - Live dual-panel TUI visualization (scatter + convergence curve)
//! - Configurable sample count and refresh interval
//! - Seedable random source for reproducible runs
//! - Gruvbox color theme
//!
//! # Example
//!
//! ```ignore
//! use montepi::render::RecordingRenderer;
//! use montepi::sim::{self, SimConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = SimConfig::new(10_000, 500, Some(42));
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut renderer = RecordingRenderer::new();
//! let sim = sim::run(&config, &mut rng, &mut renderer)?;
//! println!("π ≈ {:.5}", sim.latest_estimate().unwrap());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod error;
pub mod plot;
pub mod render;
pub mod sim;
pub mod ui;

pub use error::{MontepiError, Result};
