//! The hover decorator: underline the word under the pointer.
//!
//! [`HoverDecorator`] owns at most one underline at a time. Each successful
//! [`update`](HoverDecorator::update) replaces the previous underline; it is
//! detached from the buffer that holds it before the new one is attached, so
//! a decorated buffer never accumulates markers from this component.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;
use tracing::trace;

use crate::host::HoverTarget;
use crate::marker::{MarkerId, MarkerSet, UnderlineMarker};
use crate::text::{PointerPosition, TextRange};

/// Errors surfaced by [`HoverDecorator`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HoverError {
    /// `update` was called without a view. Callers are expected to treat
    /// this as a programming error, not a recoverable condition.
    #[error("hover update requires a document view")]
    MissingDocument,
}

/// Tracks and swaps the single clickable-word underline.
///
/// One instance per view controller; drive it from mouse-motion events and
/// call [`clear`](Self::clear) when the pointer leaves the view.
#[derive(Debug, Default)]
pub struct HoverDecorator {
    marker: Option<MarkerId>,
    document: Option<Weak<RefCell<MarkerSet>>>,
}

impl HoverDecorator {
    /// A decorator with nothing attached.
    pub const fn new() -> Self {
        Self {
            marker: None,
            document: None,
        }
    }

    /// Whether an underline is currently attached.
    pub const fn is_decorating(&self) -> bool {
        self.marker.is_some()
    }

    /// Resolve the word under `pointer` and move the underline onto it.
    ///
    /// Returns the decorated range, or `None` when the pointer resolves to
    /// blank text. A blank hit leaves any existing underline in place; only
    /// a successful resolution or [`clear`](Self::clear) moves it.
    ///
    /// # Errors
    ///
    /// [`HoverError::MissingDocument`] when `view` is `None`. Nothing is
    /// attached or detached in that case.
    pub fn update<T: HoverTarget>(
        &mut self,
        view: Option<&T>,
        pointer: PointerPosition,
    ) -> Result<Option<TextRange>, HoverError> {
        let view = view.ok_or(HoverError::MissingDocument)?;

        let range = Self::word_under(view, pointer);
        let word = view.text_in(range);
        if word.trim().is_empty() {
            trace!(x = pointer.x, y = pointer.y, "hover resolved to blank text");
            return Ok(None);
        }

        trace!(
            start = range.start,
            end = range.end,
            word = word.as_str(),
            "underlining hovered word"
        );
        let marker = UnderlineMarker::clickable(range, view.keyword_color());
        self.swap(Some((view.marker_set(), marker)));
        Ok(Some(range))
    }

    /// Detach the current underline, if any. Always leaves zero attached.
    pub fn clear(&mut self) {
        self.swap(None);
    }

    /// The enclosing word range under a pointer position.
    fn word_under<T: HoverTarget>(view: &T, pointer: PointerPosition) -> TextRange {
        let location = view.location_at(pointer);
        let offset = view.offset_at(location);
        TextRange::new(view.word_start(offset), view.word_end(offset))
    }

    /// Replace the attached marker: detach the old one from the buffer that
    /// holds it (when that buffer is still alive), then attach the new one.
    fn swap(&mut self, next: Option<(Rc<RefCell<MarkerSet>>, UnderlineMarker)>) {
        if let (Some(document), Some(id)) = (self.document.take(), self.marker.take())
            && let Some(document) = document.upgrade()
        {
            document.borrow_mut().detach(id);
        }

        if let Some((document, marker)) = next {
            let id = document.borrow_mut().attach(marker);
            self.document = Some(Rc::downgrade(&document));
            self.marker = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::style::Color;

    use crate::text::TextLocation;

    /// Minimal host: one line of text, unit cells, no gutter.
    struct FakeView {
        text: String,
        markers: Rc<RefCell<MarkerSet>>,
    }

    impl FakeView {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                markers: Rc::new(RefCell::new(MarkerSet::new())),
            }
        }

        fn is_word_char(c: char) -> bool {
            c.is_alphanumeric() || c == '_'
        }
    }

    impl HoverTarget for FakeView {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn location_at(&self, pointer: PointerPosition) -> TextLocation {
            TextLocation::new(0, pointer.x.max(0.0) as usize)
        }

        fn offset_at(&self, location: TextLocation) -> usize {
            location.column.min(self.text.chars().count())
        }

        fn word_start(&self, offset: usize) -> usize {
            let chars: Vec<char> = self.text.chars().collect();
            let mut start = offset;
            while start > 0 && Self::is_word_char(chars[start - 1]) {
                start -= 1;
            }
            start
        }

        fn word_end(&self, offset: usize) -> usize {
            let chars: Vec<char> = self.text.chars().collect();
            let mut end = offset;
            while end < chars.len() && Self::is_word_char(chars[end]) {
                end += 1;
            }
            end
        }

        fn text_in(&self, range: TextRange) -> String {
            self.text
                .chars()
                .skip(range.start)
                .take(range.len())
                .collect()
        }

        fn keyword_color(&self) -> Color {
            Color::Cyan
        }

        fn marker_set(&self) -> Rc<RefCell<MarkerSet>> {
            Rc::clone(&self.markers)
        }
    }

    fn hover(decorator: &mut HoverDecorator, view: &FakeView, x: f64) -> Option<TextRange> {
        decorator
            .update(Some(view), PointerPosition::new(x, 0.0))
            .expect("view present")
    }

    #[test]
    fn test_hovering_a_word_attaches_one_marker_over_it() {
        let view = FakeView::new("fn jump_here()");
        let mut decorator = HoverDecorator::new();

        let range = hover(&mut decorator, &view, 5.0).expect("word under pointer");
        assert_eq!(range, TextRange::new(3, 12));
        assert_eq!(view.markers.borrow().len(), 1);
        assert!(decorator.is_decorating());

        let markers = view.markers.borrow();
        let marker = markers.iter().next().unwrap();
        assert_eq!(marker.range, range);
        assert_eq!(marker.color, Color::Cyan);
        assert!(marker.visible);
        assert!(!marker.wave);
    }

    #[test]
    fn test_moving_between_words_replaces_the_marker() {
        let view = FakeView::new("alpha beta");
        let mut decorator = HoverDecorator::new();

        let first = hover(&mut decorator, &view, 1.0).unwrap();
        let second = hover(&mut decorator, &view, 7.0).unwrap();
        assert_eq!(first, TextRange::new(0, 5));
        assert_eq!(second, TextRange::new(6, 10));

        let markers = view.markers.borrow();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers.iter().next().unwrap().range, second);
    }

    #[test]
    fn test_switching_documents_detaches_from_the_first() {
        let first = FakeView::new("one");
        let second = FakeView::new("two");
        let mut decorator = HoverDecorator::new();

        hover(&mut decorator, &first, 1.0).unwrap();
        assert_eq!(first.markers.borrow().len(), 1);

        hover(&mut decorator, &second, 1.0).unwrap();
        assert!(first.markers.borrow().is_empty());
        assert_eq!(second.markers.borrow().len(), 1);
    }

    #[test]
    fn test_blank_hover_leaves_previous_marker_untouched() {
        let view = FakeView::new("word      ");
        let mut decorator = HoverDecorator::new();

        let range = hover(&mut decorator, &view, 2.0).unwrap();
        // Pointer well inside the trailing run of spaces.
        assert_eq!(hover(&mut decorator, &view, 8.0), None);

        let markers = view.markers.borrow();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers.iter().next().unwrap().range, range);
        assert!(decorator.is_decorating());
    }

    #[test]
    fn test_blank_hover_on_empty_decorator_attaches_nothing() {
        let view = FakeView::new("   ");
        let mut decorator = HoverDecorator::new();
        assert_eq!(hover(&mut decorator, &view, 1.0), None);
        assert!(view.markers.borrow().is_empty());
        assert!(!decorator.is_decorating());
    }

    #[test]
    fn test_clear_detaches_regardless_of_prior_state() {
        let view = FakeView::new("word");
        let mut decorator = HoverDecorator::new();

        decorator.clear();
        assert!(!decorator.is_decorating());

        hover(&mut decorator, &view, 1.0).unwrap();
        decorator.clear();
        assert!(view.markers.borrow().is_empty());
        assert!(!decorator.is_decorating());

        decorator.clear();
        assert!(view.markers.borrow().is_empty());
    }

    #[test]
    fn test_missing_view_fails_and_attaches_nothing() {
        let mut decorator = HoverDecorator::new();
        let err = decorator
            .update::<FakeView>(None, PointerPosition::new(1.0, 0.0))
            .unwrap_err();
        assert_eq!(err, HoverError::MissingDocument);
        assert!(!decorator.is_decorating());
    }

    #[test]
    fn test_missing_view_preserves_existing_marker() {
        let view = FakeView::new("word");
        let mut decorator = HoverDecorator::new();
        hover(&mut decorator, &view, 1.0).unwrap();

        let err = decorator
            .update::<FakeView>(None, PointerPosition::new(1.0, 0.0))
            .unwrap_err();
        assert_eq!(err, HoverError::MissingDocument);
        assert_eq!(view.markers.borrow().len(), 1);
    }

    #[test]
    fn test_dropped_buffer_skips_detach() {
        let mut decorator = HoverDecorator::new();
        {
            let view = FakeView::new("gone");
            hover(&mut decorator, &view, 1.0).unwrap();
        }
        // The buffer (and its markers) died; clearing must not panic.
        decorator.clear();
        assert!(!decorator.is_decorating());
    }

    #[test]
    fn test_rehover_same_word_keeps_exactly_one_marker() {
        let view = FakeView::new("stable");
        let mut decorator = HoverDecorator::new();
        for x in [0.0_f64, 1.0, 2.0, 5.0] {
            hover(&mut decorator, &view, x).unwrap();
            assert_eq!(view.markers.borrow().len(), 1);
        }
    }
}
