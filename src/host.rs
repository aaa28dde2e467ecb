//! The seam between the decorator and a host editor view.
//!
//! The decorator never touches text storage, rendering, or coordinate
//! mapping directly; it consumes exactly the capabilities below. The crate's
//! own [`TextView`](crate::view::TextView) implements this trait, and so can
//! any widget that knows how to map a pointer to its text.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::style::Color;

use crate::marker::MarkerSet;
use crate::text::{PointerPosition, TextLocation, TextRange};

/// Host-view capabilities consumed by [`HoverDecorator`](crate::decorator::HoverDecorator).
///
/// Implementations are expected to clamp out-of-bounds input rather than
/// panic: a pointer past the last line resolves to the last line, an offset
/// past the end of the buffer resolves to the end.
pub trait HoverTarget {
    /// Map a pixel position within the view to a text location.
    ///
    /// The view's gutter/margin x-offset is the implementation's to
    /// compensate for.
    fn location_at(&self, pointer: PointerPosition) -> TextLocation;

    /// Convert a text location to a linear char offset.
    fn offset_at(&self, location: TextLocation) -> usize;

    /// Offset of the start of the word enclosing `offset`.
    fn word_start(&self, offset: usize) -> usize;

    /// Offset one past the end of the word enclosing `offset`.
    fn word_end(&self, offset: usize) -> usize;

    /// Read the text in a half-open char-offset range.
    fn text_in(&self, range: TextRange) -> String;

    /// The theme color for the keyword syntax category, used for the
    /// clickable-word underline.
    fn keyword_color(&self) -> Color;

    /// Shared handle to the decoration list of the underlying buffer.
    ///
    /// The decorator keeps only a weak back reference to this, so a dropped
    /// buffer takes its decorations with it.
    fn marker_set(&self) -> Rc<RefCell<MarkerSet>>;
}
