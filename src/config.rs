//! # Configuration
//!
//! Compile-time constants governing the firmware glue. All limits are
//! fixed at compile time — no dynamic configuration.

/// System clock frequency in Hz (default for STM32F4 at 16 MHz HSI).
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

/// SysTick frequency in Hz. Each tick raises the TIMER event, which is
/// the idle loop's only scheduled wake-up source.
pub const TICK_HZ: u32 = 1000;

/// Name under which the embedded script is staged into the virtual
/// filesystem before the engine runs.
pub const SCRIPT_ENTRY: &str = "main.js";

/// `argv[0]` handed to the script engine. The engine is always invoked
/// with the fixed two-element argument list `[ENGINE_ARGV0, SCRIPT_ENTRY]`.
pub const ENGINE_ARGV0: &str = "runtime";

/// Heap size for the firmware build's `alloc` arena. The VFS holds one
/// staged script plus whatever the engine creates, so this stays small.
pub const HEAP_SIZE: usize = 16 * 1024;
