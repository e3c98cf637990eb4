//! Diagnostic context - frame and thread awareness.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global frame counter, advanced once per scheduler tick.
static FRAME_NUMBER: AtomicU64 = AtomicU64::new(0);

/// Diagnostic context containing runtime state.
#[derive(Debug, Clone)]
pub struct DiagContext {
    /// Current frame number.
    pub frame_number: u64,
    /// Thread name (if available).
    pub thread_name: Option<String>,
}

impl DiagContext {
    /// Capture the current context.
    pub fn capture() -> Self {
        Self {
            frame_number: frame_number(),
            thread_name: std::thread::current().name().map(String::from),
        }
    }

    /// Format context for diagnostic output.
    pub fn format(&self) -> String {
        match self.thread_name {
            Some(ref name) => format!("frame={}, thread=\"{}\"", self.frame_number, name),
            None => format!("frame={}", self.frame_number),
        }
    }
}

impl std::fmt::Display for DiagContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Increment the frame counter.
pub fn increment_frame() {
    FRAME_NUMBER.fetch_add(1, Ordering::Relaxed);
}

/// Get the current frame number.
pub fn frame_number() -> u64 {
    FRAME_NUMBER.load(Ordering::Relaxed)
}
