//! Reference host view: a rope-backed text widget that can answer hover
//! queries.
//!
//! [`TextView`] pairs a [`TextBuffer`] with [`ViewMetrics`] (pixel geometry)
//! and a scroll offset, and implements [`HoverTarget`] so the decorator can
//! drive it. The demo pager renders it; GUI hosts would supply their own
//! implementation of the trait instead.

mod buffer;

pub use buffer::{TextBuffer, is_word_char};

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::host::HoverTarget;
use crate::marker::MarkerSet;
use crate::text::{PointerPosition, TextLocation, TextRange};
use crate::theme::Theme;

/// Pixel geometry of a text view.
///
/// Terminal hosts use [`ViewMetrics::terminal_cells`] so a cell is one pixel
/// and mouse cell coordinates pass through unchanged; GUI hosts supply their
/// font's cell size and margin width in real pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    /// Width of one text cell in pixels. Nonpositive values clamp to 1.
    pub cell_width: f64,
    /// Height of one text line in pixels. Nonpositive values clamp to 1.
    pub cell_height: f64,
    /// Width of the gutter/margin left of the text, in pixels.
    pub gutter_width: f64,
}

impl ViewMetrics {
    /// Create metrics, clamping degenerate cell sizes.
    pub fn new(cell_width: f64, cell_height: f64, gutter_width: f64) -> Self {
        Self {
            cell_width: if cell_width > 0.0 { cell_width } else { 1.0 },
            cell_height: if cell_height > 0.0 { cell_height } else { 1.0 },
            gutter_width: gutter_width.max(0.0),
        }
    }

    /// Unit cells with a gutter `gutter_cols` cells wide.
    pub fn terminal_cells(gutter_cols: u16) -> Self {
        Self::new(1.0, 1.0, f64::from(gutter_cols))
    }

    /// Map a pixel position to (cell column, cell row), compensating for the
    /// gutter. Positions inside the gutter clamp to column zero.
    fn cell_at(&self, pointer: PointerPosition) -> (usize, usize) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let column = ((pointer.x - self.gutter_width).max(0.0) / self.cell_width) as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (pointer.y.max(0.0) / self.cell_height) as usize;
        (column, row)
    }
}

/// A scrollable text view over a rope buffer, with a decoration list.
pub struct TextView {
    buffer: TextBuffer,
    metrics: ViewMetrics,
    scroll: usize,
    theme: Theme,
    markers: Rc<RefCell<MarkerSet>>,
}

impl TextView {
    /// Create a view over `text`.
    pub fn new(text: &str, metrics: ViewMetrics, theme: Theme) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            metrics,
            scroll: 0,
            theme,
            markers: Rc::new(RefCell::new(MarkerSet::new())),
        }
    }

    /// The underlying buffer.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The view's theme.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The view's pixel geometry.
    pub const fn metrics(&self) -> ViewMetrics {
        self.metrics
    }

    /// Current scroll offset in lines.
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Replace the buffer content, e.g. after a file reload.
    ///
    /// Existing decorations refer to offsets in the old text, so the marker
    /// list is emptied; the scroll offset re-clamps to the new length.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = TextBuffer::from_text(text);
        *self.markers.borrow_mut() = MarkerSet::new();
        self.scroll = self.scroll.min(self.buffer.line_count().saturating_sub(1));
    }

    /// Scroll up by `n` lines.
    pub const fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Scroll down by `n` lines, keeping at least one line visible.
    pub fn scroll_down(&mut self, n: usize, visible_lines: usize) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll(visible_lines));
    }

    /// Lines visible in a window `visible_lines` tall.
    pub fn visible_range(&self, visible_lines: usize) -> std::ops::Range<usize> {
        let start = self.scroll.min(self.buffer.line_count());
        let end = (start + visible_lines).min(self.buffer.line_count());
        start..end
    }

    fn max_scroll(&self, visible_lines: usize) -> usize {
        self.buffer
            .line_count()
            .saturating_sub(visible_lines.max(1))
    }

    /// Map a cell column to a char column on `line`, honoring wide chars.
    ///
    /// A cell in the middle of a double-width char maps to that char; a cell
    /// past the end of the line maps to one past the last char (clamped
    /// later by the offset conversion).
    fn char_column_for_cell(line: &str, cell_col: usize) -> usize {
        let mut acc = 0usize;
        for (i, c) in line.chars().enumerate() {
            let width = UnicodeWidthChar::width(c).unwrap_or(0);
            if acc + width > cell_col {
                return i;
            }
            acc += width;
        }
        line.chars().count()
    }
}

impl HoverTarget for TextView {
    fn location_at(&self, pointer: PointerPosition) -> TextLocation {
        let (cell_col, row) = self.metrics.cell_at(pointer);
        let line = (self.scroll + row).min(self.buffer.line_count().saturating_sub(1));
        let column = self
            .buffer
            .line_at(line)
            .map_or(0, |text| Self::char_column_for_cell(&text, cell_col));
        TextLocation::new(line, column)
    }

    fn offset_at(&self, location: TextLocation) -> usize {
        self.buffer.offset_of(location)
    }

    fn word_start(&self, offset: usize) -> usize {
        self.buffer.word_start(offset)
    }

    fn word_end(&self, offset: usize) -> usize {
        self.buffer.word_end(offset)
    }

    fn text_in(&self, range: TextRange) -> String {
        self.buffer.text_in(range)
    }

    fn keyword_color(&self) -> Color {
        self.theme.keyword_color()
    }

    fn marker_set(&self) -> Rc<RefCell<MarkerSet>> {
        Rc::clone(&self.markers)
    }
}
