//! # Script Engine Seam
//!
//! The external script-execution engine is a collaborator with a fixed
//! contract, not something this crate implements. [`ScriptEngine`] is the
//! seam: the bootstrap stages a script into the [`Vfs`](crate::vfs::Vfs)
//! and hands the engine the entry name plus a fixed argv; the engine
//! answers with its exit code or an error.
//!
//! A debug-interrupt abort travels through the error channel as
//! [`EngineError::DebugAbort`] carrying the captured stack trace, rather
//! than exiting in place from inside an engine callback. The outcome is
//! still fail-fast — the bootstrap logs the trace and the process
//! terminates — but the termination happens at one auditable point.

use alloc::string::String;
use core::fmt;

use crate::vfs::{Vfs, VfsError};

/// Engine-side failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine's debug facility signalled; `trace` is the captured
    /// stack trace. Fatal by contract: no retry, no recovery.
    DebugAbort { trace: String },
    /// The staged entry could not be loaded from the filesystem.
    Load(VfsError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DebugAbort { trace } => write!(f, "debug abort: {trace}"),
            EngineError::Load(e) => write!(f, "script load failed: {e}"),
        }
    }
}

impl From<VfsError> for EngineError {
    fn from(e: VfsError) -> Self {
        EngineError::Load(e)
    }
}

/// The external script-execution engine.
pub trait ScriptEngine {
    /// Run the script staged at `entry` in `fs`, with the given argument
    /// list. Returns the script's exit code.
    fn run(&mut self, fs: &mut Vfs, entry: &str, argv: &[&str]) -> Result<i32, EngineError>;
}
