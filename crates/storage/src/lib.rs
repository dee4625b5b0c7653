// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

//! oj-storage: Durable journal and flag storage for the OUI journal

mod backend;
mod connector;
mod error;
mod flags;
mod fs;
mod journal;
mod lock;
mod remote;
mod repository;

pub use backend::{Backend, EnumerateFilter, Flag, FlagWrite};
pub use connector::{BackendKind, Connector, Credentials};
pub use error::{ConnectionError, StoreError};
pub use fs::FsBackend;
pub use lock::WriterLock;
pub use remote::UnimplementedBackend;
pub use repository::Repository;
