//! # Logging Sink
//!
//! Byte-exact logging: a message is the given bytes, verbatim, followed
//! by exactly one newline. The severity level is carried on the call but
//! not yet routed anywhere — this baseline has a single sink and a future
//! severity-routing backend will slot in behind [`Level`] without touching
//! call sites.
//!
//! The sink is a plain `fn(&[u8])` registered once at startup (UART or
//! semihosting writer on target, stdout on the hosted build). With no
//! sink registered, messages are dropped.

use core::mem;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

/// Message severity. Accepted on every call, unused in this baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// The registered byte sink, stored as a raw pointer so registration is a
/// single atomic store. Null means no sink.
static SINK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

/// Install the byte sink. Later calls replace earlier ones.
pub fn set_sink(sink: fn(&[u8])) {
    SINK.store(sink as *mut (), Ordering::Release);
}

fn current_sink() -> Option<fn(&[u8])> {
    let raw = SINK.load(Ordering::Acquire);
    if raw.is_null() {
        None
    } else {
        // Stored exclusively by set_sink from a valid fn pointer.
        Some(unsafe { mem::transmute::<*mut (), fn(&[u8])>(raw) })
    }
}

/// Write `message` verbatim through the sink, followed by one newline.
///
/// An empty message therefore emits exactly one newline. `level` has no
/// effect in this baseline build.
pub fn log(level: Level, message: &[u8]) {
    let _ = level;
    if let Some(sink) = current_sink() {
        sink(message);
        sink(b"\n");
    }
}

// ---------------------------------------------------------------------------
// Test capture sink (host-only)
// ---------------------------------------------------------------------------

/// Capture buffer standing in for the sink in unit tests. Tests that
/// install it serialize on the guard returned by [`capture::install`],
/// since the sink registration is process-global.
#[cfg(test)]
pub(crate) mod capture {
    use std::sync::{Mutex, MutexGuard};

    static BUF: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    static SERIAL: Mutex<()> = Mutex::new(());

    fn write(bytes: &[u8]) {
        BUF.lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(bytes);
    }

    /// Install the capture sink and clear the buffer. Hold the returned
    /// guard for the duration of the test.
    pub fn install() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        BUF.lock().unwrap_or_else(|e| e.into_inner()).clear();
        super::set_sink(write);
        guard
    }

    /// Take everything captured so far.
    pub fn take() -> Vec<u8> {
        std::mem::take(&mut *BUF.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
