// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage backend seam

use crate::connector::BackendKind;
use crate::error::StoreError;
use crate::lock::WriterLock;
use oj_core::{Oui, Record, SizeFilter, DELETED_MARKER, PRIVATE_MARKER};
use std::fmt;

/// Per-key boolean side state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Private,
    Deleted,
}

impl Flag {
    /// Marker file name inside the key directory
    pub fn marker(self) -> &'static str {
        match self {
            Flag::Private => PRIVATE_MARKER,
            Flag::Deleted => DELETED_MARKER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Private => "private",
            Flag::Deleted => "deleted",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of setting a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagWrite {
    /// Marker created or removed
    Applied,
    /// Flag already had the requested value
    AlreadySet,
    /// Key has no journal directory; nothing was written
    UnknownKey,
}

/// Which keys [`Backend::enumerate`] yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateFilter {
    pub size: SizeFilter,
    pub include_private: bool,
    pub include_deleted: bool,
}

impl EnumerateFilter {
    pub fn new(size: SizeFilter) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn include_private(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    pub(crate) fn admits(&self, private: bool, deleted: bool) -> bool {
        (self.include_private || !private) && (self.include_deleted || !deleted)
    }
}

impl Default for EnumerateFilter {
    fn default() -> Self {
        Self {
            size: SizeFilter::All,
            include_private: true,
            include_deleted: false,
        }
    }
}

/// Storage operations behind a [`Repository`](crate::Repository)
///
/// Keys and records arrive already validated.
pub trait Backend {
    fn kind(&self) -> BackendKind;

    /// Journal for `oui` in file order; empty if the key is unknown
    fn read_all(&self, oui: &Oui) -> Result<Vec<Record>, StoreError>;

    fn append(&self, record: &Record) -> Result<(), StoreError>;

    /// Current flag value, or `None` if the key is unknown
    fn flag(&self, oui: &Oui, flag: Flag) -> Result<Option<bool>, StoreError>;

    fn set_flag(&self, oui: &Oui, flag: Flag, value: bool) -> Result<FlagWrite, StoreError>;

    /// Every key with a journal that passes `filter`, in no particular order
    fn enumerate(&self, filter: EnumerateFilter) -> Result<Vec<Oui>, StoreError>;

    /// Exclusive writer lock, held until the returned guard drops
    fn lock(&self) -> Result<WriterLock, StoreError>;
}
