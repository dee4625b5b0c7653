// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal file reads and atomic rewrites

use crate::error::StoreError;
use oj_core::{JournalFile, Oui, Record, JOURNAL_FILE};
use std::fs::{self, DirBuilder};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::warn;

/// Read a key's journal, skipping anything that does not decode
pub(crate) fn read(dir: &Path, oui: &Oui) -> Result<Vec<Record>, StoreError> {
    let path = dir.join(JOURNAL_FILE);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let file: JournalFile = match serde_json::from_slice(&bytes) {
        Ok(file) => file,
        Err(e) => {
            warn!(%oui, path = %path.display(), error = %e, "unreadable journal, treating as empty");
            return Ok(Vec::new());
        }
    };

    let (records, rejected) = file.decode();
    for (index, error) in rejected {
        warn!(%oui, index, %error, "skipping invalid journal record");
    }

    let (records, foreign): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| r.oui() == oui);
    if !foreign.is_empty() {
        warn!(%oui, count = foreign.len(), "skipping records filed under the wrong key");
    }
    Ok(records)
}

/// Append one record, rewriting the journal through a temp file
///
/// Unlike [`read`], an existing journal that does not parse is an error:
/// rewriting it would throw away its history.
pub(crate) fn append(dir: &Path, record: &Record) -> Result<(), StoreError> {
    create_key_dir(dir)?;

    let path = dir.join(JOURNAL_FILE);
    let mut file = match fs::read(&path) {
        Ok(bytes) => serde_json::from_slice::<JournalFile>(&bytes)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => JournalFile::default(),
        Err(e) => return Err(e.into()),
    };
    file.recs.push(record.to_value()?);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&file.to_pretty()?)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| e.error)?;
    Ok(())
}

fn create_key_dir(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o750);
    }
    builder.create(dir)
}
