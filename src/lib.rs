//! # wakegate — interrupt/event glue for a scripted single-core firmware
//!
//! The engineering core of this crate is a race-free wait/signal primitive
//! between exactly two execution contexts on a single Cortex-M core: the
//! asynchronous interrupt context (the timer ISR, and any future device
//! ISRs) and one cooperative idle loop. Everything else — staging a script
//! into an in-memory filesystem, invoking an external script engine, stub
//! platform services — is glue around that core.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │             External script engine (trait)             │
//! ├────────────────────────────────────────────────────────┤
//! │         Bootstrap glue (bootstrap.rs, vfs.rs)          │
//! │        stage script · run engine · map exit code       │
//! ├──────────────┬──────────────────┬──────────────────────┤
//! │ WaitForEvent │   EventSignal    │    InterruptGate     │
//! │ wait.rs      │   events.rs      │    gate.rs           │
//! │ ─ sleep      │   ─ trigger()    │    ─ lock()/unlock() │
//! │   until      │   ─ pending()    │    ─ counted nesting │
//! │   pending    │   ─ clear()      │                      │
//! ├──────────────┴──────────────────┴──────────────────────┤
//! │        Platform services (log.rs, platform.rs)         │
//! ├────────────────────────────────────────────────────────┤
//! │       Arch Port (arch/cortex_m.rs, arch/host.rs)       │
//! │          irq mask · WFI · SysTick → TIMER event        │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The missed-wakeup race
//!
//! The idle loop must never sleep past an event raised between its "anything
//! pending?" check and the sleep instruction. [`wait::wait_for_event`]
//! closes that window by performing the check with interrupts masked and
//! relying on the architectural guarantee that WFI wakes on a *pending*
//! interrupt request even while delivery is masked. See `wait.rs` for the
//! full argument and the portability constraint.
//!
//! ## Concurrency model
//!
//! - Single core, single interrupt priority level. The global interrupt
//!   mask is the only mutual-exclusion primitive, and the only discipline
//!   is "wrap check-then-act in [`gate::lock`]/[`gate::unlock`]".
//! - A multi-core or nested-priority target is a required redesign, not a
//!   tuning exercise: the gate must become a real spinlock and the pending
//!   set a shared atomic bitmask with cross-core ordering.
//!
//! ## Memory model
//!
//! - The event/gate/wait core is allocation-free and uses only `core`.
//! - The VFS and bootstrap glue use `alloc`; the firmware binary installs
//!   a `CortexMHeap` allocator, the hosted build uses std's.

#![cfg_attr(target_os = "none", no_std)]

extern crate alloc;

pub mod arch;
pub mod bootstrap;
pub mod config;
pub mod engine;
pub mod events;
pub mod gate;
pub mod log;
pub mod platform;
pub mod vfs;
pub mod wait;
