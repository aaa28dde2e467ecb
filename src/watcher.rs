//! File watching for live reload.
//!
//! Uses the notify crate for cross-platform file system events. Relevance
//! filtering happens in the event callback, so the UI loop only ever drains
//! pre-filtered change signals with non-blocking polls.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

/// Watches a single file and emits debounced change notifications.
///
/// The parent directory is watched non-recursively; some platforms report
/// events against the directory rather than the file, so an event counts as
/// relevant when it names the directory, the file, or anything sharing the
/// file's name.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<()>,
    target_path: PathBuf,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl FileWatcher {
    /// Create a watcher for `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the watcher cannot be created or the parent
    /// directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // Canonicalize so event paths from the OS (absolute and canonical)
        // match our stored paths.
        let target_path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        let watch_root = target_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let (tx, changes) = mpsc::channel();
        let filter_root = watch_root.clone();
        let filter_target = target_path.clone();
        let filter_name = target_path.file_name().map(std::ffi::OsStr::to_os_string);
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = event.paths.iter().any(|p| {
                        p == &filter_root
                            || p == &filter_target
                            || filter_name
                                .as_ref()
                                .is_some_and(|name| p.file_name().is_some_and(|f| f == name))
                    });
                    if relevant {
                        let _ = tx.send(());
                    }
                }
                Err(err) => debug!(%err, "watch error"),
            })?;
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            changes,
            target_path,
            debounce,
            pending_since: None,
        })
    }

    /// The canonical path of the file being watched.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Returns true once a debounced file change is ready.
    ///
    /// Each relevant event restarts the debounce window, so a burst of
    /// writes produces a single notification after the burst settles.
    pub fn take_change_ready(&mut self) -> bool {
        if self.changes.try_iter().count() > 0 {
            self.pending_since = Some(Instant::now());
        }
        match self.pending_since {
            Some(since) if since.elapsed() >= self.debounce => {
                self.pending_since = None;
                debug!(target_path = %self.target_path.display(), "file change ready");
                true
            }
            _ => false,
        }
    }
}
