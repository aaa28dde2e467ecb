// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Hoverline
//!
//! Clickable-word hover underlining for terminal text views.
//!
//! When the mouse hovers over a word, hoverline underlines it to signal
//! that it is clickable — the usual "jump to definition" affordance. The
//! component never owns text storage or rendering; it drives a host view
//! through a small capability trait and keeps the host's decoration list
//! consistent with at most one underline.
//!
//! ## Architecture
//!
//! - [`decorator::HoverDecorator`]: resolves the word under a pointer and
//!   swaps the single underline marker
//! - [`host::HoverTarget`]: the capability seam a host view implements
//! - [`view::TextView`]: a rope-backed reference host used by the demo
//!   pager, the tests, and the benches
//!
//! ## Modules
//!
//! - [`app`]: demo pager loop and state
//! - [`config`]: persisted flag defaults
//! - [`decorator`]: the hover decorator
//! - [`host`]: host capability trait
//! - [`marker`]: underline markers and the per-buffer marker list
//! - [`text`]: pointer/location/range vocabulary
//! - [`theme`]: named styles and palettes
//! - [`ui`]: demo rendering
//! - [`view`]: reference text view
//! - [`watcher`]: file watching for live reload

pub mod app;
pub mod config;
pub mod decorator;
pub mod host;
pub mod marker;
pub mod text;
pub mod theme;
pub mod ui;
pub mod view;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::decorator::{HoverDecorator, HoverError};
    pub use crate::host::HoverTarget;
    pub use crate::marker::{MarkerSet, UnderlineMarker};
    pub use crate::text::{PointerPosition, TextLocation, TextRange};
    pub use crate::view::{TextView, ViewMetrics};
}
