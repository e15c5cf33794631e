//! Sampling and estimation loop.
//!
//! This module owns the simulation state (accumulated points and the
//! running estimate sequence) and drives the refresh cadence through an
//! injected [`Renderer`], keeping the sampling logic testable without a
//! real terminal.

mod sample;

pub use sample::{Classification, Sample};

use rand::Rng;

use crate::error::{MontepiError, Result};
use crate::plot::PlotLayout;
use crate::render::Renderer;

/// Default total sample count.
pub const DEFAULT_SAMPLES: u64 = 50_000;

/// Default refresh interval, in samples.
pub const DEFAULT_INTERVAL: u64 = 500;

/// Simulation parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Total number of samples to draw.
    pub samples: u64,
    /// Refresh the display every this many samples.
    pub interval: u64,
    /// Seed for the random source; `None` means entropy-seeded.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            interval: DEFAULT_INTERVAL,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Create a configuration.
    pub fn new(samples: u64, interval: u64, seed: Option<u64>) -> Self {
        Self {
            samples,
            interval,
            seed,
        }
    }

    /// Check preconditions.
    ///
    /// A zero interval would make the modulus check meaningless and a zero
    /// sample count degenerates to an empty run, so both are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(MontepiError::invalid_parameter(
                "samples",
                self.samples,
                "must be at least 1",
            ));
        }
        if self.interval == 0 {
            return Err(MontepiError::invalid_parameter(
                "interval",
                self.interval,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Accumulated simulation state.
///
/// The full point history is kept for the lifetime of the run: the scatter
/// panel shows the cumulative cloud at every refresh.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    inside: Vec<(f64, f64)>,
    outside: Vec<(f64, f64)>,
    estimates: Vec<f64>,
}

impl Simulation {
    /// Create an empty simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw, classify, and accumulate one sample; append the updated
    /// running estimate. Returns the classification of the new sample.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Classification {
        let sample = Sample::draw(rng);
        let class = sample.classify();
        match class {
            Classification::Inside => self.inside.push((sample.x, sample.y)),
            Classification::Outside => self.outside.push((sample.x, sample.y)),
        }

        let n = self.estimates.len() as u64 + 1;
        self.estimates.push(4.0 * self.inside.len() as f64 / n as f64);
        class
    }

    /// Number of samples drawn so far.
    pub fn samples_drawn(&self) -> u64 {
        self.estimates.len() as u64
    }

    /// Running count of samples inside the circle.
    pub fn inside_count(&self) -> u64 {
        self.inside.len() as u64
    }

    /// Count of samples outside the circle.
    pub fn outside_count(&self) -> u64 {
        self.outside.len() as u64
    }

    /// All inside points drawn so far.
    pub fn inside_points(&self) -> &[(f64, f64)] {
        &self.inside
    }

    /// All outside points drawn so far.
    pub fn outside_points(&self) -> &[(f64, f64)] {
        &self.outside
    }

    /// The per-sample estimate sequence, element N-1 = 4·inside/N.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Most recent estimate, if any sample has been drawn.
    pub fn latest_estimate(&self) -> Option<f64> {
        self.estimates.last().copied()
    }

    /// Min and max of the estimate sequence.
    pub fn estimate_bounds(&self) -> Option<(f64, f64)> {
        let first = self.latest_estimate()?;
        let bounds = self
            .estimates
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
        Some(bounds)
    }
}

/// Run the full sampling and estimation loop.
///
/// Performs exactly `config.samples` iterations, refreshing the display at
/// every multiple of `config.interval`. A final partial segment never
/// triggers a mid-loop refresh; the blocking final display re-presents the
/// layout as last refreshed. Returns the simulation state for inspection.
///
/// The operator can dismiss the viewer during a refresh, which ends the
/// run early.
pub fn run<R, P>(config: &SimConfig, rng: &mut R, renderer: &mut P) -> Result<Simulation>
where
    R: Rng + ?Sized,
    P: Renderer,
{
    config.validate()?;

    let mut layout = PlotLayout::build();
    let mut sim = Simulation::new();

    tracing::info!(
        samples = config.samples,
        interval = config.interval,
        "starting simulation"
    );

    for n in 1..=config.samples {
        sim.step(rng);

        if n % config.interval == 0 {
            layout.apply_refresh(&sim, config.interval);
            if !renderer.refresh(&layout, &sim)? {
                tracing::info!(at = n, "viewer dismissed mid-run");
                return Ok(sim);
            }
        }
    }

    tracing::info!(
        inside = sim.inside_count(),
        estimate = sim.latest_estimate(),
        "simulation finished"
    );

    renderer.wait_until_closed(&layout, &sim)?;
    Ok(sim)
}
