use std::path::PathBuf;

use crate::decorator::HoverDecorator;
use crate::text::TextRange;
use crate::theme::Theme;
use crate::view::{TextView, ViewMetrics};

/// The complete state of the demo pager.
pub struct Model {
    /// Path of the viewed file.
    pub file_path: PathBuf,
    /// The text view the decorator operates on.
    pub view: TextView,
    /// The hover decorator; owns the single underline.
    pub decorator: HoverDecorator,
    /// Word currently under the pointer, for the status bar.
    pub hovered: Option<(TextRange, String)>,
    /// Status-bar notice for the last clicked word.
    pub jump_notice: Option<String>,
    /// Gutter width in columns (line numbers plus one space).
    pub gutter_cols: u16,
    /// Whether live reload is on.
    pub watch_enabled: bool,
    /// Terminal size (width, height).
    pub size: (u16, u16),
    /// Set by [`Message::Quit`](crate::app::Message::Quit).
    pub should_quit: bool,
}

impl Model {
    /// Create the initial model for a file's content.
    pub fn new(file_path: PathBuf, text: &str, gutter_cols: u16, theme: Theme, size: (u16, u16)) -> Self {
        Self {
            file_path,
            view: TextView::new(text, ViewMetrics::terminal_cells(gutter_cols), theme),
            decorator: HoverDecorator::new(),
            hovered: None,
            jump_notice: None,
            gutter_cols,
            watch_enabled: false,
            size,
            should_quit: false,
        }
    }

    /// Lines of document visible above the status bar.
    pub fn visible_lines(&self) -> usize {
        usize::from(self.size.1.saturating_sub(1))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), "", 0, Theme::default(), (0, 0))
    }
}
