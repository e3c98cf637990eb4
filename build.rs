//! Build script for tweenslots.
//!
//! Reports feature combinations that change how diagnostics and locking
//! behave.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_PARKING_LOT");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_LOG");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DIAGNOSTICS");
    println!("cargo:rerun-if-env-changed=TWEENSLOTS_BUILD_QUIET");

    if env::var("TWEENSLOTS_BUILD_QUIET").is_ok() {
        return;
    }

    let parking_lot_enabled = env::var("CARGO_FEATURE_PARKING_LOT").is_ok();
    let log_enabled = env::var("CARGO_FEATURE_LOG").is_ok();
    let diagnostics_enabled = env::var("CARGO_FEATURE_DIAGNOSTICS").is_ok();

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let is_release = profile == "release";

    if parking_lot_enabled {
        emit_info("Using parking_lot for the shared scheduler lock");
    }

    if log_enabled && diagnostics_enabled {
        emit_note("'log' takes precedence: diagnostics go through the log crate, not stderr");
    }

    if is_release && !log_enabled && !diagnostics_enabled {
        emit_note("Release build: container diagnostics reach installed sinks only");
        emit_note("  enable 'diagnostics' or 'log' to see TS0xx codes");
    }

    if env::var("TARGET").map(|t| t.contains("wasm")).unwrap_or(false) {
        emit_warning("WebAssembly target detected");
        emit_note("DeferredCompletions needs threads to be useful; tick() still drains it");
    }
}

fn emit_info(msg: &str) {
    println!("cargo:warning=[tweenslots] {}", msg);
}

fn emit_note(msg: &str) {
    println!("cargo:warning=[tweenslots]    {}", msg);
}

fn emit_warning(msg: &str) {
    println!("cargo:warning=[tweenslots] warning: {}", msg);
}
