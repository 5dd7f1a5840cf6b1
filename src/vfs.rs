//! # Virtual Filesystem
//!
//! An in-memory staging area used to hand a script's bytes to the
//! external engine as if they were a file. Flat namespace — the bootstrap
//! only ever stages entries at the root — with a handle-based
//! open/write/close surface so staging failures show up as explicit
//! errors rather than a silently half-written script.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Filesystem operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfsError {
    /// No entry with the requested name.
    NotFound,
    /// The handle's entry no longer exists.
    BadHandle,
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound => f.write_str("no such entry"),
            VfsError::BadHandle => f.write_str("stale file handle"),
        }
    }
}

/// An open file: the entry's name plus a byte cursor.
///
/// Handles are consumed by [`Vfs::close`], so use-after-close is a move
/// error at compile time rather than a runtime failure.
#[derive(Debug)]
pub struct FileHandle {
    name: String,
    pos: usize,
}

/// The in-memory filesystem root.
#[derive(Debug, Default)]
pub struct Vfs {
    entries: BTreeMap<String, Vec<u8>>,
}

impl Vfs {
    pub fn new() -> Self {
        Vfs {
            entries: BTreeMap::new(),
        }
    }

    /// Create `name`, truncating any existing entry, and open it for
    /// writing at position zero.
    pub fn create(&mut self, name: &str) -> Result<FileHandle, VfsError> {
        self.entries.insert(name.to_string(), Vec::new());
        Ok(FileHandle {
            name: name.to_string(),
            pos: 0,
        })
    }

    /// Open an existing entry with the cursor at position zero.
    pub fn open(&mut self, name: &str) -> Result<FileHandle, VfsError> {
        if !self.entries.contains_key(name) {
            return Err(VfsError::NotFound);
        }
        Ok(FileHandle {
            name: name.to_string(),
            pos: 0,
        })
    }

    /// Write `data` at the handle's cursor, growing the entry as needed.
    /// Returns the number of bytes written (always all of them).
    pub fn write(&mut self, handle: &mut FileHandle, data: &[u8]) -> Result<usize, VfsError> {
        let entry = self
            .entries
            .get_mut(&handle.name)
            .ok_or(VfsError::BadHandle)?;
        let end = handle.pos + data.len();
        if entry.len() < end {
            entry.resize(end, 0);
        }
        entry[handle.pos..end].copy_from_slice(data);
        handle.pos = end;
        Ok(data.len())
    }

    /// Read from the handle's cursor into `buf`. Returns the number of
    /// bytes read; zero at end of entry.
    pub fn read(&self, handle: &mut FileHandle, buf: &mut [u8]) -> Result<usize, VfsError> {
        let entry = self.entries.get(&handle.name).ok_or(VfsError::BadHandle)?;
        // The cursor can sit past the end if the entry was truncated by a
        // later create; such a read is empty, not a panic.
        let pos = handle.pos.min(entry.len());
        let n = (entry.len() - pos).min(buf.len());
        buf[..n].copy_from_slice(&entry[pos..pos + n]);
        handle.pos = pos + n;
        Ok(n)
    }

    /// Close the handle.
    pub fn close(&mut self, handle: FileHandle) -> Result<(), VfsError> {
        if !self.entries.contains_key(&handle.name) {
            return Err(VfsError::BadHandle);
        }
        Ok(())
    }

    /// Borrow an entry's full contents.
    pub fn contents(&self, name: &str) -> Result<&[u8], VfsError> {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or(VfsError::NotFound)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------
