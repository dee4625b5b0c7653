// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag markers: a zero-byte file per set flag

use crate::backend::{Flag, FlagWrite};
use crate::error::StoreError;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::warn;

pub(crate) fn get(dir: &Path, flag: Flag) -> Option<bool> {
    dir.is_dir().then(|| dir.join(flag.marker()).exists())
}

pub(crate) fn set(dir: &Path, flag: Flag, value: bool) -> Result<FlagWrite, StoreError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), %flag, value, "cannot set flag on unknown key");
        return Ok(FlagWrite::UnknownKey);
    }

    let marker = dir.join(flag.marker());
    let result = if value {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&marker)
            .map(drop)
    } else {
        fs::remove_file(&marker)
    };

    match result {
        Ok(()) => Ok(FlagWrite::Applied),
        Err(e) if value && e.kind() == io::ErrorKind::AlreadyExists => Ok(FlagWrite::AlreadySet),
        Err(e) if !value && e.kind() == io::ErrorKind::NotFound => Ok(FlagWrite::AlreadySet),
        Err(e) => Err(e.into()),
    }
}
