//! Diagnostic kinds and core types.
//!
//! Mirrors rustc's diagnostic levels for familiar UX.

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A hard error - something is definitely wrong.
    Error,
    /// A warning - something is probably wrong or suboptimal.
    Warning,
    /// Additional context about another diagnostic.
    Note,
    /// Actionable suggestion to fix the issue.
    Help,
}

impl DiagnosticKind {
    /// Get the display prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Note => "note",
            DiagnosticKind::Help => "help",
        }
    }
}

/// A diagnostic message with code, message, and optional context.
///
/// Diagnostic codes follow the pattern:
/// - `TS0xx` - Slot container issues
/// - `TS1xx` - Pool and partition issues
/// - `TS2xx` - Scheduler and handle issues
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub kind: DiagnosticKind,
    /// Diagnostic code (e.g., "TS001").
    pub code: &'static str,
    /// Primary message.
    pub message: &'static str,
    /// Optional additional context.
    pub note: Option<&'static str>,
    /// Optional fix suggestion.
    pub help: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub const fn error(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic.
    pub const fn warning(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Add a note to this diagnostic.
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Add a help message to this diagnostic.
    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

// =============================================================================
// Predefined diagnostics (TS0xx - Slot containers)
// =============================================================================

/// TS001: Dense slot array grew past its capacity.
pub const TS001: Diagnostic = Diagnostic::warning(
    "TS001",
    "dense slot array grew past its capacity"
).with_note("growth reallocates the backing slots during the frame tick")
 .with_help("raise active_capacity in SchedulerConfig to keep the tick allocation-free");

/// TS002: Enqueue on a full bounded queue.
pub const TS002: Diagnostic = Diagnostic::error(
    "TS002",
    "enqueue on a full bounded queue"
).with_note("bounded queues never grow; the item was rejected")
 .with_help("increase pool_capacity, or release the item instead of pooling it");

/// TS003: Negative resize delta.
pub const TS003: Diagnostic = Diagnostic::error(
    "TS003",
    "negative resize delta"
).with_note("slot arrays only shrink by being rebuilt")
 .with_help("pass a non-negative delta to resize()");

/// TS004: Nil item passed to a container.
pub const TS004: Diagnostic = Diagnostic::error(
    "TS004",
    "nil item passed to a slot container"
).with_note("a live slot must always hold a valid item")
 .with_help("check is_nil() before enqueueing handles");

// =============================================================================
// Predefined diagnostics (TS1xx - Pools and partitions)
// =============================================================================

/// TS101: Pool full, instance released instead of pooled.
pub const TS101: Diagnostic = Diagnostic::warning(
    "TS101",
    "pool full, tween instance released instead of pooled"
).with_note("the next spawn of this kind will mint a fresh instance")
 .with_help("increase pool_capacity or per_kind_capacity in SchedulerConfig");

/// TS102: Partition index out of range.
pub const TS102: Diagnostic = Diagnostic::error(
    "TS102",
    "partition index out of range"
).with_note("partition count is fixed at construction")
 .with_help("use a kind below kind_partitions, or raise kind_partitions");

// =============================================================================
// Predefined diagnostics (TS2xx - Scheduler and handles)
// =============================================================================

/// TS201: Deferred completion queue full.
pub const TS201: Diagnostic = Diagnostic::warning(
    "TS201",
    "deferred completion queue full"
).with_note("the completion was not recorded and the tween stays active")
 .with_help("increase deferred_capacity, or tick more often");

/// TS203: Duplicate identity spawn.
pub const TS203: Diagnostic = Diagnostic::warning(
    "TS203",
    "spawn refused, (id, sub_id) already active"
).with_note("two live tweens may not share an identity pair")
 .with_help("complete the running tween first, or use a different sub_id");
