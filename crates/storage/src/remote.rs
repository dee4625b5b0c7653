// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database and web backends
//!
//! Neither exists yet. Every operation fails with
//! [`StoreError::Unsupported`] so that selecting one stops the caller
//! instead of silently dropping writes.

use crate::backend::{Backend, EnumerateFilter, Flag, FlagWrite};
use crate::connector::BackendKind;
use crate::error::StoreError;
use crate::lock::WriterLock;
use oj_core::{Oui, Record};
use tracing::error;

#[derive(Debug, Clone, Copy)]
pub struct UnimplementedBackend {
    kind: BackendKind,
}

impl UnimplementedBackend {
    pub fn new(kind: BackendKind) -> Self {
        Self { kind }
    }

    fn unsupported<T>(&self, operation: &'static str) -> Result<T, StoreError> {
        error!(kind = %self.kind, operation, "backend not implemented");
        Err(StoreError::Unsupported {
            kind: self.kind,
            operation,
        })
    }
}

impl Backend for UnimplementedBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn read_all(&self, _oui: &Oui) -> Result<Vec<Record>, StoreError> {
        self.unsupported("read")
    }

    fn append(&self, _record: &Record) -> Result<(), StoreError> {
        self.unsupported("append")
    }

    fn flag(&self, _oui: &Oui, _flag: Flag) -> Result<Option<bool>, StoreError> {
        self.unsupported("flag lookup")
    }

    fn set_flag(&self, _oui: &Oui, _flag: Flag, _value: bool) -> Result<FlagWrite, StoreError> {
        self.unsupported("flag update")
    }

    fn enumerate(&self, _filter: EnumerateFilter) -> Result<Vec<Oui>, StoreError> {
        self.unsupported("enumerate")
    }

    fn lock(&self) -> Result<WriterLock, StoreError> {
        self.unsupported("lock")
    }
}
