//! Strict mode: which diagnostic kinds abort the process.
//!
//! The mode is read from `TWEENSLOTS_STRICT` on the first diagnostic unless
//! [`set_strict_mode`] ran before it.

use std::sync::atomic::{AtomicU8, Ordering};

use super::kind::DiagnosticKind;

/// Not yet resolved from the environment.
const UNRESOLVED: u8 = u8::MAX;

static STRICT_MODE: AtomicU8 = AtomicU8::new(UNRESOLVED);

/// How emitted diagnostics are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrictMode {
    /// Report only.
    #[default]
    Warn,
    /// Panic on errors.
    PanicOnError,
    /// Panic on errors and warnings.
    PanicOnWarning,
}

impl StrictMode {
    /// Parse a `TWEENSLOTS_STRICT` value. Unknown values mean [`StrictMode::Warn`].
    pub fn parse(val: &str) -> Self {
        match val.trim().to_ascii_lowercase().as_str() {
            "1" | "error" | "true" => StrictMode::PanicOnError,
            "2" | "warning" | "all" => StrictMode::PanicOnWarning,
            _ => StrictMode::Warn,
        }
    }

    /// Whether a diagnostic of `kind` panics under this mode.
    pub fn is_fatal(self, kind: DiagnosticKind) -> bool {
        match kind {
            DiagnosticKind::Error => self != StrictMode::Warn,
            DiagnosticKind::Warning => self == StrictMode::PanicOnWarning,
            DiagnosticKind::Note | DiagnosticKind::Help => false,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => StrictMode::PanicOnError,
            2 => StrictMode::PanicOnWarning,
            _ => StrictMode::Warn,
        }
    }
}

/// Override the strict mode for the whole process.
pub fn set_strict_mode(mode: StrictMode) {
    STRICT_MODE.store(mode as u8, Ordering::Relaxed);
}

/// The active strict mode, resolving `TWEENSLOTS_STRICT` on first use.
pub fn strict_mode() -> StrictMode {
    let bits = STRICT_MODE.load(Ordering::Relaxed);
    if bits != UNRESOLVED {
        return StrictMode::from_bits(bits);
    }
    let mode = std::env::var("TWEENSLOTS_STRICT")
        .map(|val| StrictMode::parse(&val))
        .unwrap_or_default();
    // A concurrent set_strict_mode wins over the environment.
    match STRICT_MODE.compare_exchange(UNRESOLVED, mode as u8, Ordering::Relaxed, Ordering::Relaxed) {
        Ok(_) => mode,
        Err(current) => StrictMode::from_bits(current),
    }
}

/// Sets a strict mode and restores the previous one on drop.
pub struct StrictModeGuard {
    previous: StrictMode,
}

impl StrictModeGuard {
    /// Switch to `mode` until the guard is dropped.
    pub fn new(mode: StrictMode) -> Self {
        let previous = strict_mode();
        set_strict_mode(mode);
        Self { previous }
    }

    /// Shorthand for `StrictModeGuard::new(StrictMode::PanicOnError)`.
    pub fn panic_on_error() -> Self {
        Self::new(StrictMode::PanicOnError)
    }
}

impl Drop for StrictModeGuard {
    fn drop(&mut self) {
        set_strict_mode(self.previous);
    }
}
