// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

//! oj-core: Core types for the OUI journal (oj)
//!
//! This crate provides:
//! - Canonical registry keys and their size classes
//! - Journal records and their on-disk wire form
//! - The key-to-directory layout
//! - A clock abstraction for event dates

pub mod clock;
pub mod key;
pub mod path;
pub mod record;
pub mod wire;

pub use clock::{Clock, FakeClock, SystemClock};
pub use key::{KeyError, Oui, OuiSize, SizeFilter};
pub use path::{oui_from_path, oui_path, DELETED_MARKER, JOURNAL_FILE, LOCK_FILE, PRIVATE_MARKER};
pub use record::{
    by_event_date, last_registry_record, same_registry_content, sort_chronological, EventType, MetadataEntry, Record,
    RecordBody, RecordError, RecordKind, RegistryEntry, DATE_FORMAT, PRIVATE,
};
pub use wire::{JournalFile, WireRecord};
