//! Color theme for the UI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Panel title color.
    pub title: Color,
    /// Border color.
    pub border: Color,
    /// Axis and label color.
    pub axis: Color,
    /// Inside-circle sample color.
    pub inside: Color,
    /// Outside-circle sample color.
    pub outside: Color,
    /// Estimate curve color.
    pub curve: Color,
    /// Footer keymap color.
    pub footer: Color,
}

impl ThemeColors {
    /// Gruvbox dark palette.
    pub fn gruvbox_dark() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            text: Color::Rgb(235, 219, 178),
            title: Color::Rgb(251, 184, 108),
            border: Color::Rgb(102, 92, 84),
            axis: Color::Rgb(184, 187, 38),
            inside: Color::Rgb(251, 73, 52),
            outside: Color::Rgb(131, 165, 152),
            curve: Color::Rgb(235, 219, 178),
            footer: Color::Rgb(142, 192, 124),
        }
    }
}
