//! Renderer capability consumed by the sampling loop.
//!
//! The loop never talks to a terminal directly; it pushes refreshes through
//! the [`Renderer`] trait. The production implementation lives in
//! [`tui`], while tests substitute [`RecordingRenderer`].

pub mod tui;

pub use tui::TuiRenderer;

use crate::error::Result;
use crate::plot::PlotLayout;
use crate::sim::Simulation;

/// Display capability held by the sampling loop.
pub trait Renderer {
    /// Push the current layout and accumulated data to the display, then
    /// yield briefly so it can process pending events.
    ///
    /// Returns `false` when the operator dismissed the viewer, which ends
    /// the run early.
    fn refresh(&mut self, layout: &PlotLayout, sim: &Simulation) -> Result<bool>;

    /// Present the final state and block until the viewer is dismissed.
    fn wait_until_closed(&mut self, layout: &PlotLayout, sim: &Simulation) -> Result<()>;
}

/// Snapshot of one refresh event, captured by [`RecordingRenderer`].
#[derive(Debug, Clone)]
pub struct RefreshEvent {
    /// Samples drawn when the refresh fired.
    pub samples_drawn: u64,
    /// Running inside count at the refresh.
    pub inside_count: u64,
    /// Layout state as pushed.
    pub layout: PlotLayout,
}

/// Renderer that records refresh events instead of drawing.
///
/// Used to test the loop's refresh cadence without a terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Every refresh pushed by the loop, in order.
    pub refreshes: Vec<RefreshEvent>,
    /// Whether the final blocking display was reached.
    pub closed: bool,
    /// Report the viewer as dismissed after this many refreshes.
    pub dismiss_after: Option<usize>,
}

impl RecordingRenderer {
    /// Create a recorder that never dismisses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that simulates the operator quitting at the
    /// given refresh event (1-based).
    pub fn dismissing_after(refreshes: usize) -> Self {
        Self {
            dismiss_after: Some(refreshes),
            ..Self::default()
        }
    }
}

impl Renderer for RecordingRenderer {
    fn refresh(&mut self, layout: &PlotLayout, sim: &Simulation) -> Result<bool> {
        self.refreshes.push(RefreshEvent {
            samples_drawn: sim.samples_drawn(),
            inside_count: sim.inside_count(),
            layout: layout.clone(),
        });
        Ok(self
            .dismiss_after
            .map_or(true, |limit| self.refreshes.len() < limit))
    }

    fn wait_until_closed(&mut self, _layout: &PlotLayout, _sim: &Simulation) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
