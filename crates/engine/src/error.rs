// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for importing registry batches

use oj_core::{KeyError, Oui};
use oj_storage::StoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an import run
///
/// Row-level problems are logged and counted in the report instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// Why one export row was not migrated
#[derive(Debug, Error)]
pub enum MigrateRowError {
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),
    #[error("no device details for {0}")]
    NoMetadata(Oui),
}
