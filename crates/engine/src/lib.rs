// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! OUI journal import engine

mod archive;
mod classify;
mod error;
mod import;
mod migrate;
mod reconcile;
mod sweep;

pub use archive::{Archive, DayReport, RangeReport};
pub use classify::{
    classify, default_whitelist, Action, Decision, SuppressReason, DUPLICATE_OUIS,
};
pub use error::{ImportError, MigrateRowError};
pub use import::{BatchImporter, BatchReport};
pub use migrate::{
    mac_range, parse_export_row, ExportRow, MigrateReport, Migrator, DEFAULT_MIGRATION_CONFIDENCE,
    MIGRATION_SOURCE,
};
pub use reconcile::{Outcome, Reconciler};
pub use sweep::{plan_sweep, sweep};
