// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-writer lock for a journal root

use crate::error::StoreError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exclusive advisory lock; released on drop
#[derive(Debug)]
pub struct WriterLock {
    file: File,
    path: PathBuf,
}

impl WriterLock {
    /// Take the lock at `path` or fail immediately if another process holds it
    pub fn acquire(path: &Path) -> Result<Self, StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        file.try_lock_exclusive()
            .map_err(|_| StoreError::Locked(path.to_path_buf()))?;

        // Lock file holds the owner's pid
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        debug!(path = %path.display(), "writer lock acquired");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        debug!(path = %self.path.display(), "writer lock released");
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
