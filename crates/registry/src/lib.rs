// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Upstream registry files and their rows

mod file;
mod row;

pub use file::{RegistryFile, IAB_PREFIXES};
pub use row::{parse_row, RegistryRow, RowError, NO_ADDRESS, NO_COUNTRY};
