//! # Runtime Bootstrap
//!
//! Start-of-day glue: stage the embedded script into the virtual
//! filesystem, invoke the external engine on it with the fixed
//! two-element argument list, and surface the engine's return code as the
//! process exit code. Runs once; afterwards the engine owns control until
//! it returns.
//!
//! Staging failures abort the bootstrap with a diagnostic — the engine is
//! never started on a partially written script. A debug abort from the
//! engine is fail-fast: the captured trace goes through the log sink and
//! the caller terminates with code 0.

use alloc::vec::Vec;
use core::fmt;

use crate::config;
use crate::engine::{EngineError, ScriptEngine};
use crate::log::{self, Level};
use crate::vfs::{Vfs, VfsError};

/// Bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The script could not be staged into the filesystem.
    Stage(VfsError),
    /// The engine failed for a reason other than a debug abort.
    Engine(EngineError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Stage(e) => write!(f, "script staging failed: {e}"),
            BootstrapError::Engine(e) => write!(f, "engine failed: {e}"),
        }
    }
}

/// Write `script` to `name` in `fs` via create/write/close, stopping at
/// the first failure.
pub fn stage_script(fs: &mut Vfs, name: &str, script: &[u8]) -> Result<(), VfsError> {
    let mut handle = fs.create(name)?;
    fs.write(&mut handle, script)?;
    fs.close(handle)?;
    Ok(())
}

/// Stage `script` and run `engine` on it. Returns the exit code for the
/// process.
///
/// A [`EngineError::DebugAbort`] is handled here: the trace is written
/// through the log sink as `SIGINT <trace>` and the run resolves to exit
/// code 0, preserving the fail-fast contract without an in-callback exit.
pub fn run<E: ScriptEngine>(
    engine: &mut E,
    fs: &mut Vfs,
    script: &[u8],
) -> Result<i32, BootstrapError> {
    stage_script(fs, config::SCRIPT_ENTRY, script).map_err(BootstrapError::Stage)?;

    let argv = [config::ENGINE_ARGV0, config::SCRIPT_ENTRY];
    match engine.run(fs, config::SCRIPT_ENTRY, &argv) {
        Ok(code) => Ok(code),
        Err(EngineError::DebugAbort { trace }) => {
            let mut line = Vec::with_capacity("SIGINT ".len() + trace.len());
            line.extend_from_slice(b"SIGINT ");
            line.extend_from_slice(trace.as_bytes());
            log::log(Level::Error, &line);
            Ok(0)
        }
        Err(e) => Err(BootstrapError::Engine(e)),
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::capture;
    use alloc::string::ToString;

    /// Engine double that records how it was invoked and answers with a
    /// canned result.
    struct MockEngine {
        result: Result<i32, EngineError>,
        invoked_with: Option<(alloc::string::String, Vec<alloc::string::String>)>,
    }

    impl MockEngine {
        fn returning(result: Result<i32, EngineError>) -> Self {
            MockEngine {
                result,
                invoked_with: None,
            }
        }
    }

    impl ScriptEngine for MockEngine {
        fn run(&mut self, fs: &mut Vfs, entry: &str, argv: &[&str]) -> Result<i32, EngineError> {
            assert!(fs.exists(entry), "engine invoked before script staged");
            self.invoked_with = Some((
                entry.to_string(),
                argv.iter().map(|s| s.to_string()).collect(),
            ));
            self.result.clone()
        }
    }

    #[test]
    fn test_exit_code_propagates() {
        let _guard = capture::install();
        let mut fs = Vfs::new();
        let mut engine = MockEngine::returning(Ok(7));

        let code = run(&mut engine, &mut fs, b"x = 1").unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_engine_sees_staged_script_and_fixed_argv() {
        let _guard = capture::install();
        let mut fs = Vfs::new();
        let mut engine = MockEngine::returning(Ok(0));

        run(&mut engine, &mut fs, b"console.log('hi')").unwrap();

        assert_eq!(
            fs.contents(config::SCRIPT_ENTRY).unwrap(),
            b"console.log('hi')"
        );
        let (entry, argv) = engine.invoked_with.unwrap();
        assert_eq!(entry, config::SCRIPT_ENTRY);
        assert_eq!(argv, [config::ENGINE_ARGV0, config::SCRIPT_ENTRY]);
    }

    #[test]
    fn test_debug_abort_logs_trace_and_exits_zero() {
        let _guard = capture::install();
        let mut fs = Vfs::new();
        let mut engine = MockEngine::returning(Err(EngineError::DebugAbort {
            trace: "stack traceback:\n\t[C]: in ?".to_string(),
        }));

        let code = run(&mut engine, &mut fs, b"while true do end").unwrap();
        assert_eq!(code, 0, "debug abort resolves to exit code 0");

        let logged = capture::take();
        assert_eq!(
            logged,
            b"SIGINT stack traceback:\n\t[C]: in ?\n".to_vec(),
            "trace goes through the sink, newline-terminated"
        );
    }

    #[test]
    fn test_other_engine_errors_propagate() {
        let _guard = capture::install();
        let mut fs = Vfs::new();
        let mut engine = MockEngine::returning(Err(EngineError::Load(VfsError::NotFound)));

        let err = run(&mut engine, &mut fs, b"").unwrap_err();
        assert_eq!(
            err,
            BootstrapError::Engine(EngineError::Load(VfsError::NotFound))
        );
    }

    #[test]
    fn test_stage_script_roundtrip() {
        let mut fs = Vfs::new();
        stage_script(&mut fs, "test.js", b"return 0").unwrap();
        assert_eq!(fs.contents("test.js").unwrap(), b"return 0");
    }
}
