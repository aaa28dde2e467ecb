//! The demo pager and its event loop.
//!
//! Follows The Elm Architecture (TEA):
//! - [`Model`]: the complete application state
//! - [`Message`]: all possible events and actions
//! - [`update`]: pure function for state transitions
//! - [`App::run`]: event loop with rendering

mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::io::{Write, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::theme::{Theme, ThemeMode};
use crate::watcher::FileWatcher;

/// Debounce window for reload after an external file change.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    watch_enabled: bool,
    theme_mode: ThemeMode,
    gutter_cols: u16,
}

impl App {
    /// Create a new application for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            watch_enabled: false,
            theme_mode: ThemeMode::Auto,
            gutter_cols: 5,
        }
    }

    /// Enable or disable file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Set the theme mode.
    pub const fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = mode;
        self
    }

    /// Set the gutter width in columns.
    pub const fn with_gutter(mut self, cols: u16) -> Self {
        self.gutter_cols = cols;
        self
    }

    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, reading the file, or the
    /// event loop encounters an I/O failure.
    pub fn run(&self) -> Result<()> {
        let text = std::fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — hoverline requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            &text,
            self.gutter_cols,
            Theme::for_mode(self.theme_mode),
            (size.width, size.height),
        );
        model.watch_enabled = self.watch_enabled;

        execute!(stdout(), EnableMouseCapture)?;
        set_mouse_motion_tracking(true)?;

        let result = Self::event_loop(&mut terminal, &mut model);

        let _ = set_mouse_motion_tracking(false);
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut file_watcher = if model.watch_enabled {
            match FileWatcher::new(&model.file_path, WATCH_DEBOUNCE) {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    debug!(%err, "watch unavailable");
                    model.watch_enabled = false;
                    None
                }
            }
        } else {
            None
        };
        let mut needs_render = true;

        loop {
            if model.watch_enabled
                && file_watcher
                    .as_mut()
                    .is_some_and(FileWatcher::take_change_ready)
            {
                *model = update(std::mem::take(model), Message::FileChanged);
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }

                // Coalesce motion/key bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        *model = update(std::mem::take(model), msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

fn set_mouse_motion_tracking(enable: bool) -> std::io::Result<()> {
    // Any-event mouse motion reporting (1003) with SGR encoding (1006);
    // plain button tracking does not report the motion events hover needs.
    let mut out = stdout();
    if enable {
        out.write_all(b"\x1b[?1003h\x1b[?1006h")?;
    } else {
        out.write_all(b"\x1b[?1003l\x1b[?1006l")?;
    }
    out.flush()
}
