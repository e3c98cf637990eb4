//! Diagnostic macros for user-facing API.

/// Emit a runtime diagnostic.
///
/// # Example
///
/// ```rust,ignore
/// ts_diagnostic!(
///     Warning,
///     code = "TS900",
///     message = "tween scheduler ticked twice in one frame",
///     help = "drive tick() from exactly one place in the frame loop"
/// );
/// ```
#[macro_export]
macro_rules! ts_diagnostic {
    (
        $kind:ident,
        code = $code:expr,
        message = $msg:expr
        $(, note = $note:expr)?
        $(, help = $help:expr)?
    ) => {{
        let diag = $crate::diagnostics::Diagnostic {
            kind: $crate::diagnostics::DiagnosticKind::$kind,
            code: $code,
            message: $msg,
            note: None $(.or(Some($note)))?,
            help: None $(.or(Some($help)))?,
        };
        $crate::diagnostics::emit::emit(&diag);
    }};
}

/// Emit a predefined diagnostic by code.
///
/// # Example
///
/// ```rust,ignore
/// ts_emit!(TS001);
/// ```
#[macro_export]
macro_rules! ts_emit {
    ($code:ident) => {{
        $crate::diagnostics::emit::emit(&$crate::diagnostics::$code);
    }};
}

/// Emit a predefined diagnostic with captured frame/thread context.
///
/// Context is only captured when the diagnostic can reach an output.
#[macro_export]
macro_rules! ts_emit_ctx {
    ($code:ident) => {{
        if $crate::diagnostics::emit::would_emit() {
            let ctx = $crate::diagnostics::context::DiagContext::capture();
            $crate::diagnostics::emit::emit_with_context(
                &$crate::diagnostics::$code,
                &ctx.format(),
            );
        }
    }};
}
