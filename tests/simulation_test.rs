// tests/simulation_test.rs
use montepi::error::MontepiError;
use montepi::render::{RecordingRenderer, Renderer};
use montepi::sim::{self, SimConfig, Simulation};
use rand::{rngs::StdRng, SeedableRng};

fn run_recorded(samples: u64, interval: u64, seed: u64) -> (Simulation, RecordingRenderer) {
    let config = SimConfig::new(samples, interval, Some(seed));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut renderer = RecordingRenderer::new();
    let sim = sim::run(&config, &mut rng, &mut renderer).expect("valid configuration");
    (sim, renderer)
}

#[test]
fn refresh_cadence_two_checkpoints() {
    let (sim, renderer) = run_recorded(1000, 500, 42);

    assert_eq!(sim.estimates().len(), 1000);
    assert_eq!(renderer.refreshes.len(), 2);
    assert!(renderer.closed);

    let first = &renderer.refreshes[0];
    let second = &renderer.refreshes[1];
    assert_eq!(first.samples_drawn, 500);
    assert_eq!(second.samples_drawn, 1000);
    // Running count is monotonically non-decreasing across checkpoints.
    assert!(first.inside_count <= second.inside_count);
    assert!(second.inside_count <= 1000);
}

#[test]
fn partial_tail_never_refreshes() {
    let (sim, renderer) = run_recorded(1234, 500, 7);

    assert_eq!(sim.estimates().len(), 1234);
    // Refreshes only at 500 and 1000; the trailing 234 samples are
    // accumulated but never pushed mid-loop.
    assert_eq!(renderer.refreshes.len(), 2);
    assert_eq!(renderer.refreshes[1].samples_drawn, 1000);
    assert!(renderer.closed);

    // The last pushed layout reflects the state at sample 1000, not 1234.
    let layout = &renderer.refreshes[1].layout;
    assert_eq!(layout.curve.x_bounds, [0.0, 1500.0]);
}

#[test]
fn single_sample_no_refresh() {
    let (sim, renderer) = run_recorded(1, 500, 3);

    assert_eq!(sim.estimates().len(), 1);
    assert!(renderer.refreshes.is_empty());
    assert!(renderer.closed);

    let only = sim.estimates()[0];
    assert!(only == 0.0 || only == 4.0);
}

#[test]
fn seeded_runs_are_identical() {
    let (a, _) = run_recorded(5000, 500, 99);
    let (b, _) = run_recorded(5000, 500, 99);

    assert_eq!(a.inside_count(), b.inside_count());
    assert_eq!(a.estimates(), b.estimates());
}

#[test]
fn refresh_titles_track_tallies() {
    let (sim, renderer) = run_recorded(1000, 500, 11);

    let last = renderer.refreshes.last().unwrap();
    assert_eq!(
        last.layout.scatter.title,
        format!(
            "Red Dots (Inside Circle): {}, Blue Dots (Outside Circle): {}",
            sim.inside_count(),
            sim.outside_count()
        )
    );
    let estimate = sim.latest_estimate().unwrap();
    assert_eq!(
        last.layout.curve.title,
        format!("Approximating π ~ {:.5}", estimate)
    );
}

#[test]
fn dismissal_ends_run_early() {
    let config = SimConfig::new(10_000, 500, Some(5));
    let mut rng = StdRng::seed_from_u64(5);
    let mut renderer = RecordingRenderer::dismissing_after(3);
    let sim = sim::run(&config, &mut rng, &mut renderer).expect("valid configuration");

    // Dismissed at the third refresh: 1500 samples drawn, no final display.
    assert_eq!(renderer.refreshes.len(), 3);
    assert_eq!(sim.samples_drawn(), 1500);
    assert!(!renderer.closed);
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut renderer = RecordingRenderer::new();

    let err = sim::run(&SimConfig::new(0, 500, None), &mut rng, &mut renderer)
        .expect_err("zero samples must be rejected");
    assert!(matches!(err, MontepiError::InvalidParameter { name: "samples", .. }));

    let err = sim::run(&SimConfig::new(100, 0, None), &mut rng, &mut renderer)
        .expect_err("zero interval must be rejected");
    assert!(matches!(
        err,
        MontepiError::InvalidParameter {
            name: "interval",
            ..
        }
    ));

    assert!(renderer.refreshes.is_empty());
}

#[test]
fn seeded_estimates_converge() {
    for seed in [1u64, 2, 3, 4, 5] {
        let (sim, _) = run_recorded(100_000, 10_000, seed);
        let estimate = sim.latest_estimate().unwrap();
        // Standard error at N = 100k is ~0.005; 0.05 gives ample margin.
        assert!(
            (estimate - std::f64::consts::PI).abs() < 0.05,
            "seed {} diverged: {}",
            seed,
            estimate
        );
    }
}

/// Renderer whose refresh fails, to exercise error propagation.
#[derive(Debug, Default)]
struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn refresh(
        &mut self,
        _layout: &montepi::plot::PlotLayout,
        _sim: &Simulation,
    ) -> montepi::Result<bool> {
        Err(MontepiError::Terminal("lost backend".to_string()))
    }

    fn wait_until_closed(
        &mut self,
        _layout: &montepi::plot::PlotLayout,
        _sim: &Simulation,
    ) -> montepi::Result<()> {
        Ok(())
    }
}

#[test]
fn renderer_failure_is_fatal() {
    let config = SimConfig::new(1000, 500, Some(1));
    let mut rng = StdRng::seed_from_u64(1);
    let err = sim::run(&config, &mut rng, &mut FailingRenderer)
        .expect_err("refresh failure must abort the run");
    assert!(matches!(err, MontepiError::Terminal(_)));
}
