// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dated archive of registry downloads
//!
//! Layout: `<root>/<YYYY>/<MM>/<DD>/<registry file>`. Days without a
//! directory were not downloaded and are skipped.

use crate::error::ImportError;
use crate::import::{BatchImporter, BatchReport};
use chrono::NaiveDate;
use oj_core::Clock;
use oj_registry::RegistryFile;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub batches: Vec<BatchReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeReport {
    pub days: Vec<DayReport>,
    /// First date not yet imported
    pub next: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Archive {
    root: PathBuf,
}

impl Archive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn day_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format("%Y/%m/%d").to_string())
    }

    /// Registry files present for `date`, in processing order
    pub fn files(&self, date: NaiveDate) -> Vec<(RegistryFile, PathBuf)> {
        let dir = self.day_dir(date);
        RegistryFile::ALL
            .into_iter()
            .map(|file| (file, dir.join(file.file_name())))
            .filter(|(_, path)| path.is_file())
            .collect()
    }

    /// Import every archived day from `from` through `to`, in date order
    pub fn import_range(
        &self,
        importer: &BatchImporter<'_>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<RangeReport, ImportError> {
        let mut days = Vec::new();
        let mut date = from;
        while date <= to {
            let files = self.files(date);
            if files.is_empty() {
                tracing::debug!(%date, "nothing archived");
            } else {
                let batches = files
                    .into_iter()
                    .map(|(file, path)| importer.import_file(file, &path, date))
                    .collect::<Result<Vec<_>, _>>()?;
                days.push(DayReport { date, batches });
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        Ok(RangeReport { days, next: date })
    }

    /// Import from `from` through today
    pub fn catch_up<C: Clock>(
        &self,
        importer: &BatchImporter<'_>,
        from: NaiveDate,
        clock: &C,
    ) -> Result<RangeReport, ImportError> {
        self.import_range(importer, from, clock.today())
    }
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
