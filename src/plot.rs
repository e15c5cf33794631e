//! Plot layout construction and refresh-time updates.
//!
//! The layout holds the mutable title and axis-bounds state of the two
//! panels. It is built once before the loop starts and mutated only at
//! refresh checkpoints; the point data itself is read straight from the
//! simulation during drawing.

use crate::sim::Simulation;

/// Scatter panel showing the cumulative sample cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPanel {
    /// Panel title.
    pub title: String,
    /// Horizontal axis bounds.
    pub x_bounds: [f64; 2],
    /// Vertical axis bounds.
    pub y_bounds: [f64; 2],
    /// Render the plot region with a square aspect ratio.
    pub square_aspect: bool,
}

/// Curve panel showing the running estimate over sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePanel {
    /// Panel title.
    pub title: String,
    /// Horizontal axis bounds.
    pub x_bounds: [f64; 2],
    /// Vertical axis bounds.
    pub y_bounds: [f64; 2],
}

/// The two plot handles, built once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    /// Sample cloud panel.
    pub scatter: ScatterPanel,
    /// Estimate curve panel.
    pub curve: CurvePanel,
}

impl PlotLayout {
    /// Build the initial dual-panel layout.
    pub fn build() -> Self {
        Self {
            scatter: ScatterPanel {
                title: "Randomly Generated Dots".to_string(),
                x_bounds: [-1.0, 1.0],
                y_bounds: [-1.0, 1.0],
                square_aspect: true,
            },
            curve: CurvePanel {
                title: "Approximating π".to_string(),
                x_bounds: [0.0, 1000.0],
                y_bounds: [2.5, 4.0],
            },
        }
    }

    /// Update titles and bounds for a refresh checkpoint.
    ///
    /// The curve's x-axis extends one interval past the current sample
    /// count and its y-axis hugs the estimate sequence with a 0.1 margin.
    pub fn apply_refresh(&mut self, sim: &Simulation, interval: u64) {
        let n = sim.samples_drawn();

        self.scatter.title = format!(
            "Red Dots (Inside Circle): {}, Blue Dots (Outside Circle): {}",
            sim.inside_count(),
            sim.outside_count()
        );

        self.curve.x_bounds = [0.0, (n + interval) as f64];
        if let Some((min, max)) = sim.estimate_bounds() {
            self.curve.y_bounds = [min - 0.1, max + 0.1];
        }
        if let Some(estimate) = sim.latest_estimate() {
            self.curve.title = format!("Approximating π ~ {:.5}", estimate);
        }
    }
}
