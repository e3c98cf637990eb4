//! Diagnostic emission backend.
//!
//! Handles outputting diagnostics to stderr, logs, or custom sinks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use super::kind::{Diagnostic, DiagnosticKind};
use super::strict::{strict_mode, StrictMode};

/// Global flag to suppress diagnostic output (for testing).
static DIAGNOSTICS_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Global flag to enable verbose diagnostics.
static VERBOSE_DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// Optional sink receiving every emitted diagnostic.
static SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);

/// Suppress all diagnostic output.
pub fn suppress_diagnostics(suppress: bool) {
    DIAGNOSTICS_SUPPRESSED.store(suppress, Ordering::Relaxed);
}

/// Enable verbose diagnostic output.
pub fn set_verbose(verbose: bool) {
    VERBOSE_DIAGNOSTICS.store(verbose, Ordering::Relaxed);
}

/// Check if diagnostics are suppressed.
pub fn is_suppressed() -> bool {
    DIAGNOSTICS_SUPPRESSED.load(Ordering::Relaxed)
}

/// Install a sink that receives every diagnostic, or remove it with `None`.
///
/// The sink sees diagnostics even when stderr output is compiled out.
pub fn install_sink(sink: Option<Arc<dyn DiagnosticSink>>) {
    if let Ok(mut slot) = SINK.write() {
        *slot = sink;
    }
}

fn has_sink() -> bool {
    SINK.read().map(|slot| slot.is_some()).unwrap_or(false)
}

/// Whether an emitted diagnostic would reach any output, sink or strict check.
///
/// Lets callers skip building runtime context that nobody would see.
pub fn would_emit() -> bool {
    if is_suppressed() {
        return false;
    }
    if cfg!(any(feature = "log", debug_assertions, feature = "diagnostics")) {
        return true;
    }
    has_sink() || strict_mode() != StrictMode::Warn
}

fn forward_to_sink(diag: &Diagnostic) {
    if let Ok(slot) = SINK.read() {
        if let Some(sink) = slot.as_ref() {
            sink.emit(diag);
        }
    }
}

/// Emit a diagnostic.
///
/// In release builds without the `diagnostics` feature, only an installed
/// sink sees it. With the `log` feature, output goes through the log crate
/// instead of stderr.
pub fn emit(diag: &Diagnostic) {
    if is_suppressed() {
        return;
    }

    forward_to_sink(diag);

    #[cfg(feature = "log")]
    emit_to_log(diag);

    #[cfg(all(not(feature = "log"), any(debug_assertions, feature = "diagnostics")))]
    emit_to_stderr(diag, None);

    check_strict(diag, None);
}

/// Emit a diagnostic with additional runtime context.
pub fn emit_with_context(diag: &Diagnostic, context: &str) {
    if is_suppressed() {
        return;
    }

    forward_to_sink(diag);

    #[cfg(feature = "log")]
    {
        emit_to_log(diag);
        log::info!("  context: {}", context);
    }

    #[cfg(all(not(feature = "log"), any(debug_assertions, feature = "diagnostics")))]
    emit_to_stderr(diag, Some(context));

    check_strict(diag, Some(context));
}

fn check_strict(diag: &Diagnostic, context: Option<&str>) {
    if !strict_mode().is_fatal(diag.kind) {
        return;
    }
    match context {
        Some(context) => panic!(
            "[tweenslots][{}] {}\nContext: {}\nStrict mode enabled - diagnostics are fatal.",
            diag.code, diag.message, context
        ),
        None => panic!(
            "[tweenslots][{}] {}\nStrict mode enabled - diagnostics are fatal.",
            diag.code, diag.message
        ),
    }
}

/// Internal: emit to stderr.
#[cfg(all(not(feature = "log"), any(debug_assertions, feature = "diagnostics")))]
fn emit_to_stderr(diag: &Diagnostic, context: Option<&str>) {
    use std::io::Write;

    let mut stderr = std::io::stderr();
    let verbose = VERBOSE_DIAGNOSTICS.load(Ordering::Relaxed);

    let _ = writeln!(
        stderr,
        "[tweenslots][{}] {}: {}",
        diag.code,
        diag.kind.prefix(),
        diag.message
    );

    if let Some(context) = context {
        let _ = writeln!(stderr, "  context: {}", context);
    }

    if let Some(note) = diag.note {
        let _ = writeln!(stderr, "  note: {}", note);
    }

    if let Some(help) = diag.help {
        let _ = writeln!(stderr, "  help: {}", help);
    }

    if verbose && diag.kind == DiagnosticKind::Error {
        let _ = writeln!(stderr, "  hint: set RUST_BACKTRACE=1 for a backtrace");
    }

    let _ = writeln!(stderr);
}

/// Emit a diagnostic using the log crate.
#[cfg(feature = "log")]
pub fn emit_to_log(diag: &Diagnostic) {
    match diag.kind {
        DiagnosticKind::Error => {
            log::error!("[{}] {}", diag.code, diag.message);
        }
        DiagnosticKind::Warning => {
            log::warn!("[{}] {}", diag.code, diag.message);
        }
        DiagnosticKind::Note | DiagnosticKind::Help => {
            log::info!("[{}] {}", diag.code, diag.message);
        }
    }

    if let Some(note) = diag.note {
        log::info!("  note: {}", note);
    }
    if let Some(help) = diag.help {
        log::info!("  help: {}", help);
    }
}

/// A diagnostic sink trait for custom output.
pub trait DiagnosticSink: Send + Sync {
    /// Handle a diagnostic.
    fn emit(&self, diag: &Diagnostic);
}

/// A simple sink that collects diagnostics.
#[derive(Default)]
pub struct CollectingSink {
    diagnostics: std::sync::Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create a new collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(diags) => diags.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Check whether a diagnostic with `code` was collected.
    pub fn contains_code(&self, code: &str) -> bool {
        self.diagnostics().iter().any(|d| d.code == code)
    }

    /// Clear collected diagnostics.
    pub fn clear(&self) {
        if let Ok(mut diags) = self.diagnostics.lock() {
            diags.clear();
        }
    }

    /// Check if any errors were collected.
    pub fn has_errors(&self) -> bool {
        self.diagnostics()
            .iter()
            .any(|d| d.kind == DiagnosticKind::Error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diag: &Diagnostic) {
        if let Ok(mut diags) = self.diagnostics.lock() {
            diags.push(diag.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::kind::TS002;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.emit(&TS002);

        assert_eq!(sink.diagnostics().len(), 1);
        assert!(sink.has_errors());
        assert!(sink.contains_code("TS002"));

        sink.clear();
        assert_eq!(sink.diagnostics().len(), 0);
    }

    #[test]
    fn test_suppressed_diagnostics_skip_context() {
        suppress_diagnostics(true);
        assert!(!would_emit());
        suppress_diagnostics(false);
        assert!(!is_suppressed());
    }
}
