// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch import of one registry file

use crate::classify::{Action, Decision};
use crate::error::ImportError;
use crate::reconcile::Reconciler;
use crate::sweep::{plan_sweep, sweep};
use chrono::NaiveDate;
use oj_core::{EventType, Oui};
use oj_registry::{parse_row, RegistryFile};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counts for one processed registry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub file: RegistryFile,
    pub date: NaiveDate,
    /// Rows that parsed
    pub rows: usize,
    pub added: usize,
    pub changed: usize,
    /// Adds that brought back a deleted key
    pub restored: usize,
    pub unchanged: usize,
    /// Malformed or invalid rows
    pub skipped: usize,
    /// Keys marked deleted after the file was processed
    pub swept: Vec<Oui>,
}

impl BatchReport {
    fn new(file: RegistryFile, date: NaiveDate) -> Self {
        Self {
            file,
            date,
            rows: 0,
            added: 0,
            changed: 0,
            restored: 0,
            unchanged: 0,
            skipped: 0,
            swept: Vec::new(),
        }
    }

    fn count(&mut self, decision: &Decision) {
        match decision.action {
            Action::Append(EventType::Add) if decision.is_restore() => self.restored += 1,
            Action::Append(EventType::Add) => self.added += 1,
            Action::Append(EventType::Change) => self.changed += 1,
            Action::Append(EventType::Delete) => {}
            Action::Suppress(_) => self.unchanged += 1,
        }
    }

    /// Records written to journals, sweep included
    pub fn appended(&self) -> usize {
        self.added + self.changed + self.restored + self.swept.len()
    }
}

/// Feeds registry rows through a [`Reconciler`], then sweeps
pub struct BatchImporter<'a> {
    reconciler: Reconciler<'a>,
    source: String,
}

impl<'a> BatchImporter<'a> {
    pub fn new(reconciler: Reconciler<'a>, source: impl Into<String>) -> Self {
        Self {
            reconciler,
            source: source.into(),
        }
    }

    pub fn import_file(
        &self,
        file: RegistryFile,
        path: &Path,
        date: NaiveDate,
    ) -> Result<BatchReport, ImportError> {
        let handle = File::open(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "processing registry file");
        self.import_reader(file, BufReader::new(handle), date)
    }

    /// Import rows from any reader; lines need not be valid UTF-8
    pub fn import_reader<R: BufRead>(
        &self,
        file: RegistryFile,
        reader: R,
        date: NaiveDate,
    ) -> Result<BatchReport, ImportError> {
        let span = tracing::info_span!("import", %file, %date);
        let _guard = span.enter();

        let mut report = BatchReport::new(file, date);
        let mut seen = HashSet::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            let line_no = index + 1;

            let row = match parse_row(file, &line) {
                Ok(Some(row)) => row,
                Ok(None) => continue,
                Err(error) => {
                    tracing::warn!(line = line_no, %error, "skipping malformed row");
                    report.skipped += 1;
                    continue;
                }
            };
            report.rows += 1;
            seen.insert(row.oui.clone());

            match self.reconciler.observe(row.into_record(&self.source, date)) {
                Ok(outcome) => report.count(&outcome.decision),
                Err(error) if error.is_fatal() => return Err(error.into()),
                Err(error) => {
                    tracing::warn!(line = line_no, %error, "skipping invalid row");
                    report.skipped += 1;
                }
            }
        }

        let repo = self.reconciler.repository();
        report.swept = if self.reconciler.is_dry_run() {
            plan_sweep(repo, file, &seen, date)?
                .iter()
                .map(|record| record.oui().clone())
                .collect()
        } else {
            sweep(repo, file, &seen, date)?
        };

        tracing::info!(
            rows = report.rows,
            added = report.added,
            changed = report.changed,
            restored = report.restored,
            skipped = report.skipped,
            swept = report.swept.len(),
            "batch imported"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
