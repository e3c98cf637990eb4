//! Diagnostics for slot containers and the tween scheduler.
//!
//! This module provides:
//! - **Runtime diagnostics**: Container-aware error messages with codes
//! - **Sinks**: Route diagnostics to custom collectors
//! - **Strict mode**: Optional panic-on-error for CI
//!
//! ## Diagnostic Codes
//!
//! | Code  | Meaning                        |
//! |-------|--------------------------------|
//! | TS0xx | Slot container issues          |
//! | TS1xx | Pool and partition issues      |
//! | TS2xx | Scheduler and handle issues    |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tweenslots::ts_emit;
//!
//! // Emit a predefined diagnostic
//! ts_emit!(TS001);
//! ```

pub mod kind;
pub mod emit;
pub mod context;
pub mod strict;
pub mod macros;

pub use kind::{Diagnostic, DiagnosticKind};
pub use emit::{emit, emit_with_context, would_emit, install_sink, suppress_diagnostics, set_verbose, DiagnosticSink, CollectingSink};
pub use context::{DiagContext, increment_frame, frame_number};
pub use strict::{StrictMode, set_strict_mode, strict_mode, StrictModeGuard};

pub use kind::{TS001, TS002, TS003, TS004, TS101, TS102, TS201, TS203};
