// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod enumerate;
pub mod flags;
pub mod import;
pub mod migrate;
pub mod show;
