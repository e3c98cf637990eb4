//! Strict mode turns container diagnostics into panics.
//!
//! Kept in its own test binary: strict mode is process-global. Tests in this
//! file take `STRICT` so their guards never interleave.

use std::sync::{Mutex, MutexGuard};

use tweenslots::{DenseSlotArray, SchedulerConfig, StrictModeGuard, TweenScheduler};

static STRICT: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    // The should_panic test poisons the lock.
    STRICT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
#[should_panic(expected = "TS003")]
fn test_strict_mode_panics_on_negative_resize() {
    let _lock = serialize();
    let _guard = StrictModeGuard::panic_on_error();
    let mut active: DenseSlotArray<(u32, u32)> = DenseSlotArray::new(1, 1);
    let _ = active.resize(-1);
}

#[test]
fn test_completing_finished_tween_is_not_fatal() {
    let _lock = serialize();
    let _guard = StrictModeGuard::panic_on_error();
    let mut scheduler = TweenScheduler::new(SchedulerConfig::minimal()).unwrap();

    let first = scheduler.spawn(1, 0).unwrap();
    assert!(scheduler.complete(&first));
    let second = scheduler.spawn(1, 0).unwrap();

    assert!(!scheduler.complete(&first));
    assert!(!scheduler.complete(&first));
    assert!(scheduler.is_active(&second));
}
