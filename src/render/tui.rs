//! Terminal renderer backed by ratatui.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use super::Renderer;
use crate::error::Result;
use crate::plot::PlotLayout;
use crate::sim::Simulation;
use crate::ui::{self, Phase, ThemeColors};

/// How long a refresh yields to the terminal for event processing.
const REFRESH_PAUSE: Duration = Duration::from_millis(10);

/// Poll interval while blocking on the final display.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Renderer drawing to a ratatui terminal.
#[derive(Debug)]
pub struct TuiRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    colors: ThemeColors,
}

impl<'a, B: Backend> TuiRenderer<'a, B> {
    /// Create a renderer over an initialized terminal.
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self {
            terminal,
            colors: ThemeColors::gruvbox_dark(),
        }
    }

    fn draw(&mut self, layout: &PlotLayout, sim: &Simulation, phase: Phase) -> Result<()> {
        self.terminal
            .draw(|f| ui::draw(f, layout, sim, &self.colors, phase))?;
        Ok(())
    }
}

/// True for the keys that dismiss the viewer.
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(
        (modifiers, code),
        (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c'))
    )
}

impl<B: Backend> Renderer for TuiRenderer<'_, B> {
    fn refresh(&mut self, layout: &PlotLayout, sim: &Simulation) -> Result<bool> {
        self.draw(layout, sim, Phase::Sampling)?;

        // Brief yield so the terminal can process pending events.
        if event::poll(REFRESH_PAUSE)? {
            if let Event::Key(key) = event::read()? {
                if is_quit_key(key.code, key.modifiers) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn wait_until_closed(&mut self, layout: &PlotLayout, sim: &Simulation) -> Result<()> {
        loop {
            self.draw(layout, sim, Phase::Finished)?;

            if event::poll(IDLE_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if is_quit_key(key.code, key.modifiers) {
                        return Ok(());
                    }
                }
            }
        }
    }
}
