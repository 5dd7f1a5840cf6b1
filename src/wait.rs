//! # Wait For Event
//!
//! The blocking primitive the idle loop is built on: sleep until at least
//! one event is pending, with zero missed wakeups.

use crate::arch::port;
use crate::events;
use crate::gate;

/// Block until at least one event is pending, then return.
///
/// The pending check runs with interrupts masked; if nothing is pending
/// the core executes its low-power wait while still masked. An event
/// raised by an interrupt in the gap between the check and the sleep is
/// therefore not missed: the interrupt request is already pending when
/// the wait instruction executes, and the architecture wakes the core on
/// a pending request even though delivery is masked. Only the handler is
/// deferred — it runs when the final unlock unmasks, marking its event
/// pending before this function returns.
///
/// Without the masking, a request arriving between the check and the
/// sleep would have its handler run to completion first, and the core
/// would then sleep on an event that has already been signalled —
/// indefinitely, or until the next unrelated interrupt.
///
/// **Portability**: this argument requires hardware that wakes from its
/// low-power wait on a pending request regardless of the interrupt mask
/// (Cortex-M WFI does). A port to hardware without that guarantee must
/// use a different primitive, such as an atomic compare-and-sleep.
///
/// Single-shot and total: returns after one unmask, either because an
/// event is pending or because the wake was spurious. Callers inspect and
/// clear pending state themselves, retrying if they choose.
pub fn wait_for_event() {
    gate::lock();
    if !events::pending() {
        port::wait_for_interrupt();
    }
    gate::unlock();
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::host;
    use crate::events::Event;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn fresh_port() {
        host::reset();
        host::set_irq_handler(events::trigger_timer);
        events::clear(Event::TIMER);
    }

    #[test]
    fn test_returns_immediately_when_already_pending() {
        let _serial = host::lock_for_test();
        fresh_port();

        events::trigger(Event::TIMER);
        wait_for_event();

        assert!(events::is_pending(Event::TIMER));
        assert!(!host::irqs_masked(), "mask must be restored on return");
    }

    #[test]
    fn test_irq_in_race_window_is_not_missed() {
        // The classic missed-wakeup interleaving, step by step: the
        // request arrives after the gate is taken but before the sleep
        // instruction. The wait must fall straight through and the
        // handler must have run by the time the gate is released.
        let _serial = host::lock_for_test();
        fresh_port();

        gate::lock();
        host::raise_irq(); // latched; handler deferred by the mask
        assert!(
            !events::pending(),
            "handler must not run while delivery is masked"
        );

        // The request is pending, so the sleep must wake immediately.
        host::wait_for_interrupt();

        gate::unlock(); // unmask: the latched request is delivered here
        assert!(events::is_pending(Event::TIMER));
    }

    #[test]
    fn test_asynchronous_irq_wakes_sleeping_wait() {
        let _serial = host::lock_for_test();
        fresh_port();

        let done = Arc::new(AtomicBool::new(false));
        let done_isr = Arc::clone(&done);

        let isr = thread::spawn(move || {
            // Give the main thread a chance to reach the sleep; the
            // primitive is correct for either interleaving.
            thread::sleep(Duration::from_millis(20));
            host::raise_irq();
            done_isr.store(true, Ordering::SeqCst);
        });

        wait_for_event();

        isr.join().unwrap();
        assert!(done.load(Ordering::SeqCst));
        assert!(events::is_pending(Event::TIMER));
        assert!(!host::irqs_masked());

        events::clear(Event::TIMER);
    }

    #[test]
    fn test_irq_before_wait_is_observed() {
        let _serial = host::lock_for_test();
        fresh_port();

        // Delivery happens immediately while unmasked.
        host::raise_irq();
        assert!(events::is_pending(Event::TIMER));

        wait_for_event();
        assert!(events::is_pending(Event::TIMER));

        events::clear(Event::TIMER);
    }
}
