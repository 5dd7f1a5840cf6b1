//! # Architecture Abstraction Layer
//!
//! Hardware boundary for the interrupt gate and the low-power wait.
//! Two ports exist:
//!
//! - [`cortex_m`]: the real port for bare-metal ARM targets, built on the
//!   `cortex-m` crate (PRIMASK manipulation and the WFI instruction).
//! - [`host`]: a simulation used by the hosted build and the unit tests.
//!   It models the global interrupt mask, a latched IRQ request line, and
//!   — crucially — WFI's wake-on-pending-request-despite-masked behavior,
//!   so the missed-wakeup race can be exercised deterministically.
//!
//! A port exposes three operations, all non-blocking except the wait:
//!
//! - `irq_disable()` — mask interrupt delivery on the core.
//! - `irq_enable()` — unmask it (and, on the host port, deliver any
//!   request latched while masked).
//! - `wait_for_interrupt()` — suspend until an interrupt request is
//!   pending, waking even while delivery is masked.

#[cfg(target_os = "none")]
pub mod cortex_m;
#[cfg(target_os = "none")]
pub use self::cortex_m as port;

#[cfg(not(target_os = "none"))]
pub mod host;
#[cfg(not(target_os = "none"))]
pub use self::host as port;
