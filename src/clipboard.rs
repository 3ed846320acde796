//! Scrollback export
//!
//! Serializes a session's scrollback as plain text and writes it to a
//! clipboard. Each entry renders as `$ <input>` followed by its output lines;
//! entries are separated by a single blank line.

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::history::HistoryBuffer;

/// Destination for exported text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
///
/// On X11 and Wayland the copied text is served by this process and
/// disappears with it. A short-lived process should call
/// [`SystemClipboard::wait_until_taken`] so that writes block until another
/// application owns the clipboard.
pub struct SystemClipboard {
    inner: Clipboard,
    wait_until_taken: bool,
}

impl SystemClipboard {
    /// Open the system clipboard
    pub fn new() -> Result<Self> {
        let inner = Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self {
            inner,
            wait_until_taken: false,
        })
    }

    /// Make writes block until the contents are taken over (Linux only)
    pub fn wait_until_taken(mut self) -> Self {
        self.wait_until_taken = true;
        self
    }

    pub fn waits_until_taken(&self) -> bool {
        self.wait_until_taken
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn set_text(&mut self, text: &str) -> std::result::Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        if self.wait_until_taken {
            debug!("Holding clipboard contents until another application takes them");
            self.inner.set().wait().text(text)
        } else {
            self.inner.set_text(text)
        }
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn set_text(&mut self, text: &str) -> std::result::Result<(), arboard::Error> {
        self.inner.set_text(text)
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("wait_until_taken", &self.wait_until_taken)
            .finish_non_exhaustive()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.set_text(text).map_err(|e| Error::ClipboardWriteFailed {
            reason: e.to_string(),
        })
    }
}

/// In-process clipboard, for headless use and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text from the last write
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of writes received
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Serializes scrollback for the clipboard
pub struct ClipboardExporter;

impl ClipboardExporter {
    /// Render every entry, separated by one blank line
    pub fn serialize(history: &HistoryBuffer) -> String {
        history
            .iter()
            .map(|entry| entry.to_transcript())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Serialize `history` and write it to `sink` in one call
    pub fn export(history: &HistoryBuffer, sink: &mut dyn ClipboardSink) -> Result<String> {
        let text = Self::serialize(history);
        if let Err(e) = sink.write_text(&text) {
            warn!("Failed to copy scrollback: {}", e);
            return Err(e);
        }
        Ok(text)
    }
}
