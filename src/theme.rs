//! Theming and color definitions.
//!
//! Named styles for the syntax categories and UI chrome the crate touches.
//! Uses ANSI colors that adapt to the terminal's palette, with indexed
//! variants for light backgrounds.

use ratatui::style::{Color, Modifier, Style};

/// Theme selection, resolved from config or CLI.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Follow the terminal (dark unless it says otherwise).
    Auto,
    /// Force the light palette.
    Light,
    /// Force the dark palette.
    Dark,
}

/// Named styles for syntax categories and UI chrome.
///
/// The hover underline uses the keyword color; the rest styles the demo
/// pager. Hosts with their own theme systems only need to surface a keyword
/// color through [`crate::host::HoverTarget::keyword_color`].
#[derive(Debug, Clone)]
pub struct Theme {
    /// Keyword syntax category; its foreground colors the hover underline.
    pub keyword: Style,
    /// Comment syntax category.
    pub comment: Style,
    /// Literal (string/number) syntax category.
    pub literal: Style,
    /// Link style.
    pub link: Style,
    /// Plain document text.
    pub text: Style,
    /// Line-number gutter.
    pub gutter: Style,
    /// Status bar background.
    pub status_bg: Color,
    /// Status bar foreground.
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Theme for dark terminals.
    pub fn dark() -> Self {
        Self {
            keyword: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            comment: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::DIM),
            literal: Style::default().fg(Color::Green),
            link: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            text: Style::default(),
            gutter: Style::default().fg(Color::Indexed(240)),
            status_bg: Color::Indexed(236), // Dark gray that works on both
            status_fg: Color::Indexed(252), // Light gray
        }
    }

    /// Theme for light terminals.
    pub fn light() -> Self {
        Self {
            keyword: Style::default()
                .fg(Color::Indexed(31)) // Darker cyan
                .add_modifier(Modifier::BOLD),
            comment: Style::default()
                .fg(Color::Indexed(242))
                .add_modifier(Modifier::DIM),
            literal: Style::default().fg(Color::Indexed(28)), // Darker green
            link: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::UNDERLINED),
            text: Style::default(),
            gutter: Style::default().fg(Color::Indexed(245)),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    /// Resolve a mode into a palette. `Auto` falls back to dark, matching
    /// most terminal defaults.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto | ThemeMode::Dark => Self::dark(),
        }
    }

    /// The color for the keyword syntax category.
    pub fn keyword_color(&self) -> Color {
        self.keyword.fg.unwrap_or(Color::Cyan)
    }
}
