use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Message, Model};
use crate::text::PointerPosition;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    fn handle_key(key: crossterm::event::KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown(1)),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Message::PageDown),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
            KeyCode::Char('r') => Some(Message::FileChanged),
            _ => None,
        }
    }

    fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let in_doc = usize::from(mouse.row) < model.visible_lines();
        let pointer = PointerPosition::new(f64::from(mouse.column), f64::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Moved => {
                if in_doc {
                    Some(Message::Hover(pointer))
                } else {
                    Some(Message::PointerLeft)
                }
            }
            MouseEventKind::Up(MouseButton::Left) if in_doc => Some(Message::JumpAt(pointer)),
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    use crate::theme::Theme;

    fn model() -> Model {
        Model::new(
            PathBuf::from("demo.txt"),
            "alpha beta\ngamma",
            0,
            Theme::dark(),
            (40, 10),
        )
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_motion_in_document_area_hovers() {
        let msg = App::handle_event(&mouse(MouseEventKind::Moved, 3, 0), &model());
        assert_eq!(msg, Some(Message::Hover(PointerPosition::new(3.0, 0.0))));
    }

    #[test]
    fn test_motion_on_status_bar_leaves() {
        // Row 9 is the status bar of a 10-row terminal.
        let msg = App::handle_event(&mouse(MouseEventKind::Moved, 3, 9), &model());
        assert_eq!(msg, Some(Message::PointerLeft));
    }

    #[test]
    fn test_click_in_document_jumps() {
        let msg = App::handle_event(
            &mouse(MouseEventKind::Up(MouseButton::Left), 2, 0),
            &model(),
        );
        assert_eq!(msg, Some(Message::JumpAt(PointerPosition::new(2.0, 0.0))));
    }

    #[test]
    fn test_wheel_scrolls() {
        let msg = App::handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0), &model());
        assert_eq!(msg, Some(Message::ScrollDown(3)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            App::handle_event(&key(KeyCode::Char('q')), &model()),
            Some(Message::Quit)
        );
        assert_eq!(
            App::handle_event(&key(KeyCode::Esc), &model()),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(
            App::handle_event(&Event::Resize(80, 24), &model()),
            Some(Message::Resize(80, 24))
        );
    }
}
