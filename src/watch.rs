//! File system watcher for incremental index rebuilds.
//!
//! Monitors the content directory and re-runs the index builder when
//! markdown documents are added, changed, or deleted.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     Event Loop                         │
//! │                                                        │
//! │  ┌──────────┐    ┌──────────┐    ┌──────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│  build_index()   │  │
//! │  │ events   │    │ (300ms)  │    │  (full rebuild)  │  │
//! │  └──────────┘    └──────────┘    └──────────────────┘  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Bursts of events (editor save, `git checkout`) collapse into a single
//! rebuild: every event resets the pending timer, and the rebuild fires
//! only after the window elapses quietly. Each rebuild regenerates the
//! whole index, so there is nothing to cancel - the last write wins.

use crate::{config::SiteConfig, index::build_index, log};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const IDLE_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts) or hidden.
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Whether this path is a markdown document worth rebuilding for.
fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md") && !is_temp_file(path)
}

/// Format path as relative without extension for log display.
///
/// `/proj/content/posts/hello.md` → `posts/hello`
fn rel_path(path: &Path, content_dir: &Path) -> String {
    path.strip_prefix(content_dir)
        .unwrap_or(path)
        .with_extension("")
        .display()
        .to_string()
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events into a single rebuild trigger.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
        }
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if is_document(&path) {
                self.pending.insert(path);
            }
        }
        if !self.pending.is_empty() {
            self.last_event = Some(Instant::now());
        }
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(IDLE_TIMEOUT_SECS)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Watcher
// =============================================================================

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Owns the notify watcher, its event channel, and the debounce state.
///
/// Created per watch session; dropping it stops the underlying watcher.
pub struct ContentWatcher {
    // Held for its side effect: dropping it unregisters the watch.
    _watcher: notify::RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    debouncer: Debouncer,
    config: &'static SiteConfig,
}

impl ContentWatcher {
    /// Set up a recursive watch on the content directory.
    pub fn new(config: &'static SiteConfig) -> Result<Self> {
        let content_dir = config.content_dir();

        let (tx, rx) = std::sync::mpsc::channel();
        let mut watcher =
            notify::recommended_watcher(tx).context("Failed to create file watcher")?;
        watcher
            .watch(&content_dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", content_dir.display()))?;

        log!("watch"; "watching {}", content_dir.display());

        Ok(Self {
            _watcher: watcher,
            rx,
            debouncer: Debouncer::new(),
            config,
        })
    }

    /// Run the event loop until the watch channel disconnects.
    pub fn run(mut self) -> Result<()> {
        loop {
            match self.rx.recv_timeout(self.debouncer.timeout()) {
                Ok(Ok(event)) if is_relevant(&event) => self.debouncer.add(event),
                Ok(Ok(_)) => {}
                Ok(Err(e)) => log!("watch"; "error: {e}"),
                Err(RecvTimeoutError::Timeout) if self.debouncer.ready() => {
                    let changed = self.debouncer.take();
                    self.rebuild(&changed);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        Ok(())
    }

    /// Rebuild the index, logging the trigger paths.
    ///
    /// Build failures are logged and the loop keeps running; the stale
    /// index stays in place until a later rebuild succeeds.
    fn rebuild(&self, changed: &[PathBuf]) {
        let content_dir = self.config.content_dir();
        let triggers: Vec<String> = changed
            .iter()
            .map(|p| rel_path(p, &content_dir))
            .collect();
        log!("watch"; "{} changed, rebuilding index", triggers.join(", "));

        match build_index(self.config) {
            Ok(count) => log!("watch"; "indexed {count} articles"),
            Err(err) => log!("watch"; "rebuild failed: {err:#}"),
        }
    }
}
