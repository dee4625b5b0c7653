// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::connector::BackendKind;
use oj_core::{KeyError, Oui, RecordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from configuring or connecting a backend
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("backend address is empty")]
    EmptyAddress,
    #[error("unknown backend kind '{0}': expected filesystem, database or web")]
    UnknownKind(String),
    #[error("{0} backend requires a username and password")]
    MissingCredentials(BackendKind),
    #[error("journal directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("{0} backend is not implemented")]
    Unsupported(BackendKind),
    #[error("could not resolve journal directory: {0}")]
    Resolve(#[from] io::Error),
}

/// Errors from journal and flag operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidKey(#[from] KeyError),
    #[error("invalid record for {oui}: {source}")]
    InvalidRecord {
        oui: Oui,
        #[source]
        source: RecordError,
    },
    #[error("repository is not connected")]
    NotConnected,
    #[error("{operation} is not implemented for the {kind} backend")]
    Unsupported {
        kind: BackendKind,
        operation: &'static str,
    },
    #[error("journal is locked by another importer ({})", .0.display())]
    Locked(PathBuf),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl StoreError {
    /// Whether the error should stop an import run
    ///
    /// Only a bad key or a bad record is scoped to a single row; any
    /// failure of the store itself leaves the journal in doubt.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            StoreError::InvalidKey(_) | StoreError::InvalidRecord { .. }
        )
    }
}
