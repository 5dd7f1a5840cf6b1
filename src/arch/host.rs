//! # Host Port Layer
//!
//! A software model of the single-core interrupt machinery, used by the
//! hosted build and the unit tests. It reproduces the three behaviors the
//! wait primitive depends on:
//!
//! - a global interrupt mask (`irq_disable`/`irq_enable`),
//! - a latched interrupt request line: a request raised while masked is
//!   not lost, its handler is delivered on the next unmask,
//! - wake-despite-masked: [`wait_for_interrupt`] returns as soon as a
//!   request is pending, whether or not delivery is masked.
//!
//! Handlers run synchronously in whichever thread unmasks (or raises while
//! unmasked) — the moral equivalent of the core taking the exception.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread;

/// Global interrupt mask (PRIMASK stand-in). `true` = delivery masked.
static MASKED: AtomicBool = AtomicBool::new(false);

/// Latched interrupt request line. Set by [`raise_irq`], cleared when the
/// handler is delivered.
static IRQ_LINE: AtomicBool = AtomicBool::new(false);

/// The registered interrupt handler (the simulated ISR).
static HANDLER: Mutex<Option<fn()>> = Mutex::new(None);

/// Mask interrupt delivery.
#[inline]
pub fn irq_disable() {
    MASKED.store(true, Ordering::SeqCst);
}

/// Unmask interrupt delivery, then deliver any request latched while
/// masked.
#[inline]
pub fn irq_enable() {
    MASKED.store(false, Ordering::SeqCst);
    dispatch();
}

/// Suspend until an interrupt request is pending.
///
/// Returns while the request is still latched and the handler not yet run
/// when delivery is masked — the Cortex-M WFI contract.
pub fn wait_for_interrupt() {
    while !IRQ_LINE.load(Ordering::SeqCst) {
        thread::yield_now();
    }
}

/// Raise the simulated interrupt request line.
///
/// Delivered immediately when unmasked; latched for the next unmask
/// otherwise. Callable from any thread (the "ISR context" of a test).
pub fn raise_irq() {
    IRQ_LINE.store(true, Ordering::SeqCst);
    if !MASKED.load(Ordering::SeqCst) {
        dispatch();
    }
}

/// Register the handler run when a request is delivered.
pub fn set_irq_handler(handler: fn()) {
    *lock_handler() = Some(handler);
}

/// Whether interrupt delivery is currently masked.
pub fn irqs_masked() -> bool {
    MASKED.load(Ordering::SeqCst)
}

/// Drop mask, request line, and handler back to power-on state.
pub fn reset() {
    MASKED.store(false, Ordering::SeqCst);
    IRQ_LINE.store(false, Ordering::SeqCst);
    *lock_handler() = None;
}

/// Consume a latched request and run the handler, if one is registered.
fn dispatch() {
    if IRQ_LINE.swap(false, Ordering::SeqCst) {
        let handler = *lock_handler();
        if let Some(handler) = handler {
            handler();
        }
    }
}

fn lock_handler() -> std::sync::MutexGuard<'static, Option<fn()>> {
    HANDLER.lock().unwrap_or_else(|e| e.into_inner())
}

/// Serialize tests that touch the port's process-global state.
#[cfg(test)]
pub(crate) fn lock_for_test() -> std::sync::MutexGuard<'static, ()> {
    static SERIAL: Mutex<()> = Mutex::new(());
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}
