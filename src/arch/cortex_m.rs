//! # Cortex-M Port Layer
//!
//! Hardware-specific code for single-core ARM Cortex-M processors.
//! Implements the global interrupt mask, the low-power wait, and the
//! SysTick timer that drives the TIMER event.
//!
//! ## Why WFI is safe under a masked PRIMASK
//!
//! `wait_for_interrupt` lowers to the WFI instruction. On Cortex-M, WFI
//! wakes the core on a *pending* interrupt request regardless of PRIMASK:
//! masking defers the handler, not the wake-up itself. The wait primitive
//! in `wait.rs` depends on exactly this guarantee. A port to hardware
//! without it must substitute a different sleep primitive (for example an
//! atomic compare-and-sleep) — that is a correctness requirement of the
//! port, not an optimization choice.

use cortex_m::interrupt;
use cortex_m::peripheral::syst::SystClkSource;

use crate::config::{SYSTEM_CLOCK_HZ, TICK_HZ};

// ---------------------------------------------------------------------------
// Interrupt mask
// ---------------------------------------------------------------------------

/// Mask all interrupt delivery on the core (set PRIMASK).
///
/// Idempotent at the hardware level; callable from ISR and thread context.
#[inline]
pub fn irq_disable() {
    interrupt::disable();
}

/// Unmask interrupt delivery on the core (clear PRIMASK).
///
/// # Safety discipline
/// Callers go through [`crate::gate`], which only unmasks when the
/// critical-section nesting depth returns to zero. Unmasking at the wrong
/// moment would allow an ISR to observe a half-updated pending set.
#[inline]
pub fn irq_enable() {
    unsafe { interrupt::enable() };
}

/// Suspend the core until an interrupt request is pending (WFI).
///
/// Wakes on a pending request even while PRIMASK is set; the handler
/// itself runs only after [`irq_enable`].
#[inline]
pub fn wait_for_interrupt() {
    cortex_m::asm::wfi();
}

// ---------------------------------------------------------------------------
// SysTick timer
// ---------------------------------------------------------------------------

/// Configure SysTick to fire at `TICK_HZ` using the processor clock.
///
/// Each tick enters `SysTick()` below, which raises the TIMER event and
/// thereby wakes the idle loop out of its low-power wait.
pub fn configure_systick(syst: &mut cortex_m::peripheral::SYST) {
    let reload = SYSTEM_CLOCK_HZ / TICK_HZ - 1;
    syst.set_reload(reload);
    syst.clear_current();
    syst.set_clock_source(SystClkSource::Core);
    syst.enable_counter();
    syst.enable_interrupt();
}

/// SysTick exception handler — the hardware timer ISR.
///
/// Runs in interrupt context: it must complete in bounded time, and it
/// must not block or allocate. Raising the event is a single bit-set.
#[no_mangle]
pub extern "C" fn SysTick() {
    crate::events::trigger_timer();
}
