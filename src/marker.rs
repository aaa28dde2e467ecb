//! Underline decorations and the per-buffer decoration list.
//!
//! The crate owns the decoration type; hosts own the storage. A host buffer
//! embeds a [`MarkerSet`] and hands out a shared handle to it (see
//! [`crate::host::HoverTarget::marker_set`]), the same way editor frameworks
//! ship a marker type that documents store.

use ratatui::style::{Color, Modifier, Style};

use crate::text::TextRange;

/// An underline decoration over a range of text.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlineMarker {
    /// The decorated range (half-open char offsets).
    pub range: TextRange,
    /// Underline color, from the host theme.
    pub color: Color,
    /// Whether the marker is drawn at all.
    pub visible: bool,
    /// Wavy underline. Hosts without undercurl support draw a straight line.
    pub wave: bool,
}

impl UnderlineMarker {
    /// A visible, straight underline — the clickable-word affordance.
    pub const fn clickable(range: TextRange, color: Color) -> Self {
        Self {
            range,
            color,
            visible: true,
            wave: false,
        }
    }

    /// The style a host applies to cells inside [`Self::range`].
    pub fn style(&self) -> Style {
        Style::default()
            .fg(self.color)
            .add_modifier(Modifier::UNDERLINED)
    }
}

/// Handle to a marker attached to a [`MarkerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(u64);

/// The decoration list of a single buffer.
///
/// Attach returns an id; detach by id. Iteration order is attach order.
#[derive(Debug, Default)]
pub struct MarkerSet {
    next_id: u64,
    markers: Vec<(MarkerId, UnderlineMarker)>,
}

impl MarkerSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            markers: Vec::new(),
        }
    }

    /// Attach a marker, returning its handle.
    pub fn attach(&mut self, marker: UnderlineMarker) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.push((id, marker));
        id
    }

    /// Detach a marker by handle. Unknown handles are a no-op.
    pub fn detach(&mut self, id: MarkerId) -> Option<UnderlineMarker> {
        let idx = self.markers.iter().position(|(mid, _)| *mid == id)?;
        Some(self.markers.remove(idx).1)
    }

    /// Look up a marker by handle.
    pub fn get(&self, id: MarkerId) -> Option<&UnderlineMarker> {
        self.markers
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, marker)| marker)
    }

    /// Number of attached markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no markers are attached.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iterate over attached markers in attach order.
    pub fn iter(&self) -> impl Iterator<Item = &UnderlineMarker> {
        self.markers.iter().map(|(_, marker)| marker)
    }

    /// The style to draw at `offset`, if a visible marker covers it.
    ///
    /// Later-attached markers win when ranges overlap.
    pub fn style_at(&self, offset: usize) -> Option<Style> {
        self.markers
            .iter()
            .rev()
            .find(|(_, marker)| marker.visible && marker.range.contains(offset))
            .map(|(_, marker)| marker.style())
    }
}
