//! Vocabulary types shared between the decorator and host views.
//!
//! Offsets are char offsets into the buffer; ranges are half-open.

/// A pointer position in pixels, relative to the top-left of the view.
///
/// Terminal hosts that only see cell coordinates can use unit cell metrics
/// so cells and pixels coincide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal distance from the left edge of the view, in pixels.
    pub x: f64,
    /// Vertical distance from the top edge of the view, in pixels.
    pub y: f64,
}

impl PointerPosition {
    /// Create a pointer position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in the text, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextLocation {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (chars from the start of the line).
    pub column: usize,
}

impl TextLocation {
    /// Create a location at the given line and column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open range of char offsets: `start..end`.
///
/// # Example
///
/// ```
/// use hoverline::text::TextRange;
///
/// let range = TextRange::new(4, 9);
/// assert_eq!(range.len(), 5);
/// assert!(range.contains(4));
/// assert!(!range.contains(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// First offset inside the range.
    pub start: usize,
    /// First offset past the end of the range.
    pub end: usize,
}

impl TextRange {
    /// Create a range. `end` values below `start` collapse to an empty
    /// range at `start`.
    pub const fn new(start: usize, end: usize) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Number of chars covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers nothing.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the range.
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Whether two ranges share at least one offset.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
