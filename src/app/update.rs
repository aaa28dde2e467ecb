use tracing::{debug, warn};

use crate::app::Model;
use crate::host::HoverTarget;
use crate::text::{PointerPosition, TextRange};

/// All possible events and actions in the demo pager.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of document
    GoToTop,
    /// Go to end of document
    GoToBottom,
    /// Pointer moved over the document area
    Hover(PointerPosition),
    /// Pointer left the document area
    PointerLeft,
    /// Click on the document area ("jump" on an underlined word)
    JumpAt(PointerPosition),
    /// File changed externally, reload
    FileChanged,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure state transition: apply a message to the model.
pub fn update(mut model: Model, message: Message) -> Model {
    match message {
        Message::ScrollUp(n) => model.view.scroll_up(n),
        Message::ScrollDown(n) => {
            let visible = model.visible_lines();
            model.view.scroll_down(n, visible);
        }
        Message::PageUp => model.view.scroll_up(model.visible_lines()),
        Message::PageDown => {
            let visible = model.visible_lines();
            model.view.scroll_down(visible, visible);
        }
        Message::GoToTop => model.view.scroll_up(usize::MAX),
        Message::GoToBottom => {
            let visible = model.visible_lines();
            model.view.scroll_down(usize::MAX - 1, visible);
        }
        Message::Hover(pointer) => {
            model.hovered = hover(&mut model, pointer);
        }
        Message::PointerLeft => {
            model.decorator.clear();
            model.hovered = None;
        }
        Message::JumpAt(pointer) => {
            model.hovered = hover(&mut model, pointer);
            model.jump_notice = model
                .hovered
                .as_ref()
                .map(|(_, word)| format!("jump to `{word}`"));
        }
        Message::FileChanged => reload(&mut model),
        Message::Resize(width, height) => {
            model.size = (width, height);
            // Re-clamp the scroll offset against the new window height.
            let visible = model.visible_lines();
            model.view.scroll_down(0, visible);
        }
        Message::Quit => model.should_quit = true,
    }
    model
}

/// Drive the decorator for a pointer position and describe the result.
fn hover(model: &mut Model, pointer: PointerPosition) -> Option<(TextRange, String)> {
    match model.decorator.update(Some(&model.view), pointer) {
        Ok(Some(range)) => Some((range, model.view.text_in(range))),
        Ok(None) => None,
        Err(err) => {
            warn!(%err, "hover update rejected");
            None
        }
    }
}

fn reload(model: &mut Model) {
    // The old markers refer to offsets in the old text; release ours first.
    model.decorator.clear();
    model.hovered = None;
    match std::fs::read_to_string(&model.file_path) {
        Ok(text) => {
            debug!(path = %model.file_path.display(), "reloaded file");
            model.view.set_text(&text);
        }
        Err(err) => warn!(%err, path = %model.file_path.display(), "reload failed"),
    }
}
