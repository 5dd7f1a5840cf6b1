//! # Interrupt Gate
//!
//! The crate's sole mutual-exclusion primitive: the core's global
//! interrupt mask, wrapped in a counted critical section. Any
//! check-then-act sequence on shared state (the pending-event set above
//! all) must run between [`lock`] and [`unlock`].
//!
//! Nesting is counted rather than toggled: an inner `unlock` does not
//! unmask while an outer critical section is still open, so composed
//! calls (the engine's `events_lock` around code that itself takes the
//! gate) behave correctly. Valid on a single core with a single interrupt
//! priority level only; see the crate docs for the multi-core redesign.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::arch::port;

/// Critical-section nesting depth. Mutated only with interrupts already
/// masked (lock masks before incrementing), so plain relaxed ordering is
/// sufficient on the single core.
static DEPTH: AtomicU32 = AtomicU32::new(0);

/// Enter a critical section: mask interrupts, bump the nesting depth.
///
/// Non-blocking, non-allocating, callable from ISR and thread context.
#[inline]
pub fn lock() {
    // Mask first so the increment itself cannot be interleaved with an ISR.
    port::irq_disable();
    DEPTH.fetch_add(1, Ordering::Relaxed);
}

/// Leave a critical section: drop the nesting depth, unmask interrupts
/// only when the outermost section closes.
///
/// An `unlock` without a matching `lock` is a caller error. Debug builds
/// assert; release builds unmask unconditionally, which is the behavior
/// of a bare disable/enable toggle.
#[inline]
pub fn unlock() {
    let prev = DEPTH.fetch_sub(1, Ordering::Relaxed);
    debug_assert!(prev != 0, "gate::unlock without matching gate::lock");
    if prev <= 1 {
        port::irq_enable();
    }
}

/// Run a closure inside a critical section.
///
/// The closure must be short — interrupt delivery is deferred for its
/// entire duration.
#[inline]
pub fn with<R>(f: impl FnOnce() -> R) -> R {
    lock();
    let result = f();
    unlock();
    result
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::host;

    #[test]
    fn test_lock_masks_and_unlock_unmasks() {
        let _serial = host::lock_for_test();
        host::reset();

        assert!(!host::irqs_masked());
        lock();
        assert!(host::irqs_masked());
        unlock();
        assert!(!host::irqs_masked());
    }

    #[test]
    fn test_nested_unlock_keeps_mask() {
        let _serial = host::lock_for_test();
        host::reset();

        lock();
        lock();
        unlock();
        assert!(host::irqs_masked(), "inner unlock must not unmask");
        unlock();
        assert!(!host::irqs_masked());
    }

    #[test]
    fn test_with_restores_mask_and_returns_value() {
        let _serial = host::lock_for_test();
        host::reset();

        let value = with(|| {
            assert!(host::irqs_masked());
            42
        });
        assert_eq!(value, 42);
        assert!(!host::irqs_masked());
    }
}
