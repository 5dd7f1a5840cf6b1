//! # wakegate firmware entry
//!
//! Start-of-day sequence (both builds): stage the embedded script into
//! the virtual filesystem, run the engine on it, surface its return code.
//!
//! - On `target_os = "none"` this is a `cortex-m-rt` firmware image: heap
//!   and SysTick come up first, and after the bootstrap the idle loop
//!   sleeps on [`wait_for_event`](wakegate::wait::wait_for_event), woken
//!   by the TIMER event each tick.
//! - On a hosted target the same bootstrap runs against the host port and
//!   exits with the engine's code — the loop that lets the glue be
//!   exercised without a board attached.
//!
//! The real script engine is an external collaborator; [`StubEngine`]
//! stands in for it at the seam until one is linked in.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

extern crate alloc;

use wakegate::engine::{EngineError, ScriptEngine};
use wakegate::log::{self, Level};
use wakegate::vfs::Vfs;
use wakegate::bootstrap;

/// The script staged at boot. A real image embeds the application here.
const SCRIPT: &[u8] = b"console.log('hello from the staged script')\n";

/// Placeholder engine: checks the staged entry is readable, reports, and
/// returns success. The seam where the external engine links in.
struct StubEngine;

impl ScriptEngine for StubEngine {
    fn run(&mut self, fs: &mut Vfs, entry: &str, argv: &[&str]) -> Result<i32, EngineError> {
        let script = fs.contents(entry)?;
        let banner = alloc::format!("{}: {} ({} bytes staged)", argv[0], entry, script.len());
        log::log(Level::Info, banner.as_bytes());
        Ok(0)
    }
}

// ---------------------------------------------------------------------------
// Firmware build
// ---------------------------------------------------------------------------

#[cfg(target_os = "none")]
mod firmware {
    use super::*;
    use alloc_cortex_m::CortexMHeap;
    use core::mem::MaybeUninit;
    use cortex_m_rt::entry;
    use panic_halt as _;

    use wakegate::arch::port;
    use wakegate::config::HEAP_SIZE;
    use wakegate::events::{self, Event};
    use wakegate::{gate, platform, wait};

    #[global_allocator]
    static ALLOCATOR: CortexMHeap = CortexMHeap::empty();

    static mut HEAP: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];

    #[entry]
    fn main() -> ! {
        unsafe { ALLOCATOR.init(core::ptr::addr_of!(HEAP) as usize, HEAP_SIZE) }

        let mut cp = cortex_m::Peripherals::take().unwrap();
        platform::uptime_init();
        port::configure_systick(&mut cp.SYST);

        let mut fs = Vfs::new();
        let mut engine = StubEngine;
        // The board layer registers the log sink before anything prints;
        // without one, diagnostics are dropped and the idle loop still runs.
        if let Err(e) = bootstrap::run(&mut engine, &mut fs, SCRIPT) {
            let diag = alloc::format!("bootstrap failed: {e}");
            log::log(Level::Error, diag.as_bytes());
        }

        // Idle loop: sleep until something is pending, then consume it.
        // Check-then-clear runs under the gate so a tick arriving between
        // the two cannot be lost.
        let mut ticks: u32 = 0;
        loop {
            wait::wait_for_event();
            let fired = gate::with(|| {
                if events::is_pending(Event::TIMER) {
                    events::clear(Event::TIMER);
                    true
                } else {
                    false
                }
            });
            if fired {
                ticks = ticks.wrapping_add(1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hosted build
// ---------------------------------------------------------------------------

#[cfg(not(target_os = "none"))]
fn main() {
    use std::io::Write;

    fn stdout_sink(bytes: &[u8]) {
        let mut out = std::io::stdout();
        let _ = out.write_all(bytes);
        let _ = out.flush();
    }

    log::set_sink(stdout_sink);
    log::log(Level::Info, b"--> START.");

    let mut fs = Vfs::new();
    let mut engine = StubEngine;
    let code = match bootstrap::run(&mut engine, &mut fs, SCRIPT) {
        Ok(code) => code,
        Err(e) => {
            let diag = format!("bootstrap failed: {e}");
            log::log(Level::Error, diag.as_bytes());
            1
        }
    };

    log::log(Level::Info, b"--> END.");
    std::process::exit(code);
}
