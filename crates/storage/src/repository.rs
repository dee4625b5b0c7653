// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository facade over a backend
//!
//! Validates keys and records, checks the connection, then dispatches.
//! Callers hand in raw key strings or [`Oui`]s; both are normalized here.

use crate::backend::{Backend, EnumerateFilter, Flag, FlagWrite};
use crate::connector::{BackendKind, Connector};
use crate::error::StoreError;
use crate::fs::FsBackend;
use crate::lock::WriterLock;
use crate::remote::UnimplementedBackend;
use oj_core::{Oui, Record};
use tracing::{debug, warn};

pub struct Repository {
    backend: Box<dyn Backend>,
    connector: Option<Connector>,
    connected: bool,
}

impl Repository {
    /// Connect and pick the backend for the connector's kind
    ///
    /// Database and web connectors open onto [`UnimplementedBackend`], so
    /// the first operation fails with [`StoreError::Unsupported`].
    pub fn open(mut connector: Connector) -> Result<Self, StoreError> {
        let backend: Box<dyn Backend> = match connector.kind() {
            BackendKind::Filesystem => {
                connector.connect()?;
                match connector.root() {
                    Some(root) => Box::new(FsBackend::new(root)),
                    None => return Err(StoreError::NotConnected),
                }
            }
            kind @ (BackendKind::Database | BackendKind::Web) => {
                warn!(%kind, address = connector.address(), "backend has no implementation");
                Box::new(UnimplementedBackend::new(kind))
            }
        };
        debug!(kind = %connector.kind(), address = connector.address(), "opened repository");
        Ok(Self {
            backend,
            connector: Some(connector),
            connected: true,
        })
    }

    /// Wrap an already usable backend
    pub fn with_backend(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            connector: None,
            connected: true,
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn close(&mut self) {
        if let Some(connector) = self.connector.as_mut() {
            connector.disconnect();
        }
        self.connected = false;
    }

    fn connected_backend(&self) -> Result<&dyn Backend, StoreError> {
        if self.connected {
            Ok(self.backend.as_ref())
        } else {
            Err(StoreError::NotConnected)
        }
    }

    /// The key's journal in append order; empty for an unknown key
    pub fn get(&self, key: impl AsRef<str>) -> Result<Vec<Record>, StoreError> {
        let oui = Oui::parse(key.as_ref())?;
        self.connected_backend()?.read_all(&oui)
    }

    /// Verify and append one record, creating the key on first use
    pub fn append(&self, record: &Record) -> Result<(), StoreError> {
        record
            .verify()
            .map_err(|source| StoreError::InvalidRecord {
                oui: record.oui().clone(),
                source,
            })?;
        self.connected_backend()?.append(record)
    }

    pub fn is_private(&self, key: impl AsRef<str>) -> Result<Option<bool>, StoreError> {
        self.flag(key, Flag::Private)
    }

    pub fn is_deleted(&self, key: impl AsRef<str>) -> Result<Option<bool>, StoreError> {
        self.flag(key, Flag::Deleted)
    }

    pub fn set_private(&self, key: impl AsRef<str>, value: bool) -> Result<FlagWrite, StoreError> {
        self.set_flag(key, Flag::Private, value)
    }

    pub fn set_deleted(&self, key: impl AsRef<str>, value: bool) -> Result<FlagWrite, StoreError> {
        self.set_flag(key, Flag::Deleted, value)
    }

    pub fn flag(&self, key: impl AsRef<str>, flag: Flag) -> Result<Option<bool>, StoreError> {
        let oui = Oui::parse(key.as_ref())?;
        self.connected_backend()?.flag(&oui, flag)
    }

    pub fn set_flag(
        &self,
        key: impl AsRef<str>,
        flag: Flag,
        value: bool,
    ) -> Result<FlagWrite, StoreError> {
        let oui = Oui::parse(key.as_ref())?;
        self.connected_backend()?.set_flag(&oui, flag, value)
    }

    pub fn enumerate(&self, filter: EnumerateFilter) -> Result<Vec<Oui>, StoreError> {
        self.connected_backend()?.enumerate(filter)
    }

    /// Exclusive lock for an import run
    pub fn lock_writer(&self) -> Result<WriterLock, StoreError> {
        self.connected_backend()?.lock()
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
