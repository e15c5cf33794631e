//! Montepi - a terminal-based Monte Carlo estimator of π.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use montepi::render::TuiRenderer;
use montepi::sim::{self, SimConfig, DEFAULT_INTERVAL, DEFAULT_SAMPLES};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "montepi")]
#[command(about = "A terminal-based Monte Carlo estimator of pi", long_about = None)]
struct Args {
    /// Total number of samples to draw
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Refresh the display every this many samples
    #[arg(long, default_value_t = DEFAULT_INTERVAL)]
    interval: u64,

    /// Seed the random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Montepi");
    }

    // Validate parameters before touching the terminal
    let config = SimConfig::new(args.samples, args.interval, args.seed);
    config.validate()?;

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run simulation
    let res = {
        let mut renderer = TuiRenderer::new(&mut terminal);
        sim::run(&config, &mut rng, &mut renderer)
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if args.log.is_some() {
        tracing::info!("Montepi exited");
    }

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
