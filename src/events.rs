//! # Event Signal
//!
//! Process-wide record of which events are pending: set from interrupt
//! context, tested and cleared from the idle loop. A pending event is a
//! flag, not a counter — triggering twice before the consumer looks is
//! indistinguishable from triggering once, and a single [`clear`] resets
//! it (see the design notes in `DESIGN.md`).
//!
//! Each individual operation is a single atomic bit operation: bounded
//! time, no blocking, no allocation, safe from ISR context. There is no
//! internal check-then-act synchronization, deliberately — any compound
//! sequence (test then clear, test then sleep) must run under the
//! interrupt gate. That contract is what [`crate::wait`] is built on.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::gate;

/// An event identifier, backed by one bit of the pending mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event(u32);

impl Event {
    /// The hardware timer tick, raised by the SysTick ISR.
    pub const TIMER: Event = Event(1 << 0);

    /// Identifier for a future device event on bit `bit` (0..32).
    pub const fn from_bit(bit: u8) -> Event {
        Event(1 << (bit as u32))
    }

    /// The event's bit in the pending mask.
    pub const fn mask(self) -> u32 {
        self.0
    }
}

/// A set of pending events.
///
/// The global instance backs the free functions below; separate instances
/// exist only in tests.
pub struct EventSet {
    bits: AtomicU32,
}

impl EventSet {
    pub const fn new() -> Self {
        EventSet {
            bits: AtomicU32::new(0),
        }
    }

    /// Mark `event` pending. Idempotent.
    #[inline]
    pub fn trigger(&self, event: Event) {
        self.bits.fetch_or(event.mask(), Ordering::Relaxed);
    }

    /// Whether any event is pending. No side effects.
    #[inline]
    pub fn any_pending(&self) -> bool {
        self.bits.load(Ordering::Relaxed) != 0
    }

    /// Whether `event` is pending. No side effects.
    #[inline]
    pub fn is_pending(&self, event: Event) -> bool {
        self.bits.load(Ordering::Relaxed) & event.mask() != 0
    }

    /// Remove `event` from the pending set.
    #[inline]
    pub fn clear(&self, event: Event) {
        self.bits.fetch_and(!event.mask(), Ordering::Relaxed);
    }
}

/// The process-wide pending set. Init-at-startup, lives for the life of
/// the firmware; there is no teardown path.
static EVENTS: EventSet = EventSet::new();

/// Mark `event` pending in the global set. ISR-safe.
#[inline]
pub fn trigger(event: Event) {
    EVENTS.trigger(event);
}

/// Whether any event is pending in the global set.
#[inline]
pub fn pending() -> bool {
    EVENTS.any_pending()
}

/// Whether `event` is pending in the global set.
#[inline]
pub fn is_pending(event: Event) -> bool {
    EVENTS.is_pending(event)
}

/// Remove `event` from the global pending set.
#[inline]
pub fn clear(event: Event) {
    EVENTS.clear(event);
}

// ---------------------------------------------------------------------------
// Exported interface for the external engine and the timer ISR
// ---------------------------------------------------------------------------

/// Raise the TIMER event. Invoked only from the hardware timer ISR.
#[inline]
pub fn trigger_timer() {
    trigger(Event::TIMER);
}

/// Critical-section entry exported to the external engine, which uses it
/// to protect its own shared runtime state.
#[inline]
pub fn events_lock() {
    gate::lock();
}

/// Critical-section exit matching [`events_lock`].
#[inline]
pub fn events_unlock() {
    gate::unlock();
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_lifecycle() {
        let set = EventSet::new();
        assert!(!set.is_pending(Event::TIMER));
        assert!(!set.any_pending());

        set.trigger(Event::TIMER);
        assert!(set.is_pending(Event::TIMER));
        assert!(set.any_pending());

        // Visible until explicitly cleared.
        assert!(set.is_pending(Event::TIMER));

        set.clear(Event::TIMER);
        assert!(!set.is_pending(Event::TIMER));
        assert!(!set.any_pending());
    }

    #[test]
    fn test_double_trigger_single_clear() {
        // The ISR fires twice before the idle loop looks: pending is a
        // flag, not a counter, so one clear resets it.
        let set = EventSet::new();
        set.trigger(Event::TIMER);
        set.trigger(Event::TIMER);
        assert!(set.is_pending(Event::TIMER));

        set.clear(Event::TIMER);
        assert!(!set.is_pending(Event::TIMER));
    }

    #[test]
    fn test_events_are_independent() {
        let uart = Event::from_bit(1);
        let set = EventSet::new();

        set.trigger(Event::TIMER);
        set.trigger(uart);
        assert!(set.is_pending(Event::TIMER));
        assert!(set.is_pending(uart));

        set.clear(Event::TIMER);
        assert!(!set.is_pending(Event::TIMER));
        assert!(set.is_pending(uart), "clearing TIMER must not drop UART");
        assert!(set.any_pending());
    }

    #[test]
    fn test_clear_unset_event_is_noop() {
        let set = EventSet::new();
        set.clear(Event::TIMER);
        assert!(!set.any_pending());
    }
}
