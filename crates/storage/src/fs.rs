// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem backend
//!
//! One directory per key under the journal root (see [`oj_core::oui_path`]),
//! holding the `records` journal and the flag markers.

use crate::backend::{Backend, EnumerateFilter, Flag, FlagWrite};
use crate::connector::BackendKind;
use crate::error::StoreError;
use crate::lock::WriterLock;
use crate::{flags, journal};
use oj_core::{oui_from_path, oui_path, Oui, Record, JOURNAL_FILE, LOCK_FILE};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_dir(&self, oui: &Oui) -> PathBuf {
        oui_path(&self.root, oui)
    }
}

impl Backend for FsBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Filesystem
    }

    fn read_all(&self, oui: &Oui) -> Result<Vec<Record>, StoreError> {
        journal::read(&self.key_dir(oui), oui)
    }

    fn append(&self, record: &Record) -> Result<(), StoreError> {
        journal::append(&self.key_dir(record.oui()), record)?;
        debug!(oui = %record.oui(), event = %record.event_type(), "appended record");
        Ok(())
    }

    fn flag(&self, oui: &Oui, flag: Flag) -> Result<Option<bool>, StoreError> {
        Ok(flags::get(&self.key_dir(oui), flag))
    }

    fn set_flag(&self, oui: &Oui, flag: Flag, value: bool) -> Result<FlagWrite, StoreError> {
        flags::set(&self.key_dir(oui), flag, value)
    }

    fn enumerate(&self, filter: EnumerateFilter) -> Result<Vec<Oui>, StoreError> {
        let mut keys = Vec::new();
        // root/XX/YY/ZZ/records or root/XX/YY/ZZ/S/records
        for entry in WalkDir::new(&self.root).min_depth(4).max_depth(5) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable journal entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || entry.file_name() != JOURNAL_FILE {
                continue;
            }
            let Some(dir) = entry.path().parent() else {
                continue;
            };
            let Some(oui) = oui_from_path(&self.root, dir) else {
                continue;
            };
            if !filter.size.matches(&oui) {
                continue;
            }

            let private = flags::get(dir, Flag::Private).unwrap_or(false);
            let deleted = flags::get(dir, Flag::Deleted).unwrap_or(false);
            if filter.admits(private, deleted) {
                keys.push(oui);
            }
        }
        Ok(keys)
    }

    fn lock(&self) -> Result<WriterLock, StoreError> {
        WriterLock::acquire(&self.root.join(LOCK_FILE))
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
