//! Session timers
//!
//! Two cosmetic timers run alongside a session: the cursor blink and the
//! reset of the "copied" acknowledgment. Both are tokio tasks and are
//! aborted when the session shuts down or drops. The acknowledgment flag
//! itself works without a runtime; only its automatic reset needs one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::TerminalConfig;
use crate::error::{Error, Result};

/// Shortest accepted blink period; `tokio::time::interval` rejects zero
const MIN_BLINK_PERIOD: Duration = Duration::from_millis(1);

/// Periodically toggles cursor visibility
#[derive(Debug)]
pub struct CursorBlink {
    visible: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl CursorBlink {
    /// Start blinking on `handle`, toggling every `period`
    ///
    /// Periods shorter than one millisecond are raised to one millisecond.
    pub fn start(handle: &Handle, period: Duration) -> Self {
        let period = period.max(MIN_BLINK_PERIOD);
        let visible = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&visible);

        let task = handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                flag.fetch_xor(true, Ordering::Relaxed);
            }
        });

        Self { visible, task }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    fn stop(&self) {
        self.task.abort();
    }
}

/// Transient "copied" flag
///
/// The flag is raised on every successful copy. With a reset timer attached
/// it lowers itself after the configured duration; without one it stays
/// raised until [`CopyAcknowledgment::clear`].
///
/// The flag holds the generation of the copy that raised it, so a reset
/// scheduled by an older copy can never lower a newer one.
#[derive(Debug)]
pub struct CopyAcknowledgment {
    duration: Duration,
    raised_by: Arc<AtomicU64>,
    generation: u64,
    timer: Option<Handle>,
    reset: Option<JoinHandle<()>>,
}

impl CopyAcknowledgment {
    /// A lowered flag with no reset timer
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            raised_by: Arc::new(AtomicU64::new(0)),
            generation: 0,
            timer: None,
            reset: None,
        }
    }

    /// Schedule resets on `handle` from now on
    pub fn attach_timer(&mut self, handle: Handle) {
        self.timer = Some(handle);
    }

    /// Drop the reset timer and lower the flag
    pub fn detach_timer(&mut self) {
        self.timer = None;
        self.clear();
    }

    /// Whether a reset timer is attached
    pub fn is_timed(&self) -> bool {
        self.timer.is_some()
    }

    /// Raise the flag and (re)start the reset timer
    pub fn trigger(&mut self) {
        self.cancel_reset();

        self.generation += 1;
        let generation = self.generation;
        self.raised_by.store(generation, Ordering::SeqCst);

        if let Some(handle) = &self.timer {
            let raised_by = Arc::clone(&self.raised_by);
            let duration = self.duration;
            self.reset = Some(handle.spawn(async move {
                tokio::time::sleep(duration).await;
                let _ =
                    raised_by.compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst);
            }));
        }
    }

    /// Lower the flag now
    pub fn clear(&mut self) {
        self.cancel_reset();
        self.raised_by.store(0, Ordering::SeqCst);
    }

    pub fn is_copied(&self) -> bool {
        self.raised_by.load(Ordering::SeqCst) != 0
    }

    fn cancel_reset(&mut self) {
        if let Some(pending) = self.reset.take() {
            pending.abort();
        }
    }
}

impl Drop for CopyAcknowledgment {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

/// Runtime-backed timers scoped to one session
#[derive(Debug)]
pub struct SessionTimers {
    handle: Handle,
    cursor: CursorBlink,
    stopped: bool,
}

impl SessionTimers {
    /// Start the timers on the current tokio runtime
    pub fn start(config: &TerminalConfig) -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| Error::TimersUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self::start_on(&handle, config))
    }

    /// Start the timers on a specific runtime
    pub fn start_on(handle: &Handle, config: &TerminalConfig) -> Self {
        debug!(
            "Starting session timers (blink {}ms, copy feedback {}ms)",
            config.cursor_blink_ms, config.copy_feedback_ms
        );
        Self {
            handle: handle.clone(),
            cursor: CursorBlink::start(handle, Duration::from_millis(config.cursor_blink_ms)),
            stopped: false,
        }
    }

    /// Runtime the timers were started on
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    /// Cancel every pending timer
    pub fn shutdown(&mut self) {
        if self.stopped {
            return;
        }
        self.cursor.stop();
        self.stopped = true;
        debug!("Session timers stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for SessionTimers {
    fn drop(&mut self) {
        self.shutdown();
    }
}
