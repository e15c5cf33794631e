//! User interface rendering - pure drawing layer.
//!
//! Immediate-mode rendering of the two panels from the layout descriptors
//! and the simulation accumulators. No state is kept here.

mod theme;

pub use theme::ThemeColors;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::plot::{CurvePanel, PlotLayout, ScatterPanel};
use crate::sim::Simulation;

/// Which stage of the run is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mid-run refresh; sampling continues after the yield.
    Sampling,
    /// Final blocking display.
    Finished,
}

/// Draw the full UI.
pub fn draw(
    f: &mut Frame<'_>,
    layout: &PlotLayout,
    sim: &Simulation,
    colors: &ThemeColors,
    phase: Phase,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_scatter(f, panels[0], &layout.scatter, sim, colors);
    draw_curve(f, panels[1], &layout.curve, sim, colors);
    draw_footer(f, chunks[1], sim, colors, phase);
}

fn draw_scatter(
    f: &mut Frame<'_>,
    area: Rect,
    panel: &ScatterPanel,
    sim: &Simulation,
    colors: &ThemeColors,
) {
    let area = if panel.square_aspect {
        square_plot_rect(area)
    } else {
        area
    };

    let datasets = vec![
        Dataset::default()
            .name("inside")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.inside))
            .data(sim.inside_points()),
        Dataset::default()
            .name("outside")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.outside))
            .data(sim.outside_points()),
    ];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.axis))
        .bounds(panel.x_bounds)
        .labels(bounds_labels(panel.x_bounds, 0));
    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.axis))
        .bounds(panel.y_bounds)
        .labels(bounds_labels(panel.y_bounds, 0));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(panel.title.clone())
                .title_style(Style::default().fg(colors.title)),
        )
        .style(Style::default().bg(colors.bg).fg(colors.text))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_curve(
    f: &mut Frame<'_>,
    area: Rect,
    panel: &CurvePanel,
    sim: &Simulation,
    colors: &ThemeColors,
) {
    // Full estimate sequence indexed from 1, downsampled to the panel width.
    let mut series: Vec<(f64, f64)> = sim
        .estimates()
        .iter()
        .enumerate()
        .map(|(i, &e)| ((i + 1) as f64, e))
        .collect();
    if area.width > 4 {
        let bins = (area.width as usize).saturating_sub(8).max(1);
        if series.len() > bins {
            let step = (series.len() as f64) / (bins as f64);
            let mut simple = Vec::with_capacity(bins);
            let mut pos = 0.0;
            while (pos as usize) < series.len() {
                let idx = (pos as usize).min(series.len() - 1);
                simple.push(series[idx]);
                pos += step;
            }
            series = simple;
        }
    }

    let datasets = vec![Dataset::default()
        .name("π estimate")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.curve))
        .data(&series)];

    let x_axis = Axis::default()
        .title("Number of Samples")
        .style(Style::default().fg(colors.axis))
        .bounds(panel.x_bounds)
        .labels(bounds_labels(panel.x_bounds, 0));
    let y_axis = Axis::default()
        .title("Approximated π")
        .style(Style::default().fg(colors.axis))
        .bounds(panel.y_bounds)
        .labels(bounds_labels(panel.y_bounds, 2));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(panel.title.clone())
                .title_style(Style::default().fg(colors.title)),
        )
        .style(Style::default().bg(colors.bg).fg(colors.text))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_footer(
    f: &mut Frame<'_>,
    area: Rect,
    sim: &Simulation,
    colors: &ThemeColors,
    phase: Phase,
) {
    let text = match phase {
        Phase::Sampling => format!("Sampling... {} drawn | q: quit", sim.samples_drawn()),
        Phase::Finished => format!(
            "Done: {} samples, {} inside | q: close",
            sim.samples_drawn(),
            sim.inside_count()
        ),
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.footer))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Min/mid/max axis labels with the given precision.
fn bounds_labels(bounds: [f64; 2], precision: usize) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format!("{:.*}", precision, bounds[0]),
        format!("{:.*}", precision, mid),
        format!("{:.*}", precision, bounds[1]),
    ]
}

/// Clamp an area to a visually square plot region.
///
/// Terminal cells are roughly twice as tall as wide, so a square region
/// takes two columns per row. The result is centered in the input area.
fn square_plot_rect(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).max(1).min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
