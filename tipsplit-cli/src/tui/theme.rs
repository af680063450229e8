//! Colour theme for the splitter screen.
//!
//! A dark slate background with a teal accent for focus and amber for money.

use ratatui::style::{Color, Modifier, Style};

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent for focused rows and the brand
    pub teal: Color,
    /// Money values
    pub amber: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - panel borders
    pub slate_light: Color,

    pub text_primary: Color,
    pub text_muted: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            teal: Color::Rgb(45, 212, 191),
            amber: Color::Rgb(251, 191, 36),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(51, 65, 85),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(239, 68, 68),
            success: Color::Rgb(34, 197, 94),
            info: Color::Cyan,
        }
    }
}

impl Theme {
    /// Title style - bold accent text
    pub fn title(&self) -> Style {
        Style::default().fg(self.teal).add_modifier(Modifier::BOLD)
    }

    /// Label style - muted text
    pub fn label(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.slate)
            .bg(self.teal)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.teal)
    }

    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

/// Icons used throughout the TUI
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";
    pub const CHECK: &str = "✓";
}
