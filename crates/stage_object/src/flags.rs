//! Shared run flags.
//!
//! [`RunFlags`] is the pause/finish state shared between the runtime and
//! one sprite's executor thread. The runtime owns the writer side; bricks
//! and the executor only read, polling cooperatively while they wait.

use std::sync::atomic::{AtomicBool, Ordering};

/// Paused/finished state of one sprite's script execution.
///
/// The runtime is the sole writer ([`pause`](Self::pause),
/// [`resume`](Self::resume), [`finish`](Self::finish)); everything on the
/// executor thread treats the flags as a read-only capability.
#[derive(Debug, Default)]
pub struct RunFlags {
    paused: AtomicBool,
    finished: AtomicBool,
}

impl RunFlags {
    /// Create flags in the running (unpaused, unfinished) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend script execution at the next pause poll.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume script execution.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Mark the script as terminated. There is no way back: bricks waiting
    /// while paused abort, and the executor stops before the next brick.
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }

    /// Returns `true` if execution is currently suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Returns `true` if the script has been terminated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}
