// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-off migration of device annotations from a DeepMac database export
//!
//! The export is tab-separated: key, row id, organization, media type,
//! device type, device model, note. `NULL` marks an absent value. Each row
//! becomes a metadata `add` covering the key's whole address range, and is
//! only written when the key already has a journal.

use crate::error::{ImportError, MigrateRowError};
use chrono::NaiveDate;
use oj_core::{EventType, MetadataEntry, Oui, Record};
use oj_storage::{Repository, StoreError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Source stamped on migrated records
pub const MIGRATION_SOURCE: &str = "DeepMac project";

/// Confidence given to migrated annotations unless overridden
pub const DEFAULT_MIGRATION_CONFIDENCE: u8 = 3;

const NULL: &str = "NULL";
const MAC_HEX_LEN: usize = 12;

/// One parsed export row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub oui: Oui,
    pub org_name: Option<String>,
    pub media_type: Option<String>,
    pub device_type: Option<String>,
    pub device_model: Option<String>,
    pub note: Option<String>,
}

impl ExportRow {
    /// Annotation spanning every address under the key
    pub fn into_record(self, confidence: u8, date: NaiveDate) -> Record {
        let (start, end) = mac_range(&self.oui);
        let mut entry = MetadataEntry::new(start, end, confidence);
        entry.media_type = self.media_type;
        entry.device_type = self.device_type;
        entry.device_model = self.device_model;
        entry.note = self.note;
        Record::metadata(self.oui, MIGRATION_SOURCE, EventType::Add, date, entry)
    }
}

/// First and last MAC under a key
pub fn mac_range(oui: &Oui) -> (String, String) {
    let key = oui.as_str();
    let pad = MAC_HEX_LEN.saturating_sub(key.len());
    (
        format!("{key}{}", "0".repeat(pad)),
        format!("{key}{}", "F".repeat(pad)),
    )
}

/// Parse one export line; blank lines yield `None`
pub fn parse_export_row(line: &str) -> Result<Option<ExportRow>, MigrateRowError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    let oui = Oui::parse(fields[0].trim())?;
    let row = ExportRow {
        oui,
        org_name: value(&fields, 2),
        media_type: value(&fields, 3),
        device_type: value(&fields, 4),
        device_model: value(&fields, 5),
        note: value(&fields, 6),
    };

    if row.media_type.is_none()
        && row.device_type.is_none()
        && row.device_model.is_none()
        && row.note.is_none()
    {
        return Err(MigrateRowError::NoMetadata(row.oui));
    }
    Ok(Some(row))
}

fn value(fields: &[&str], index: usize) -> Option<String> {
    let value = fields.get(index)?.trim();
    if value.is_empty() || value == NULL {
        None
    } else {
        Some(value.to_string())
    }
}

/// Counts for one migration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateReport {
    /// Rows that parsed
    pub rows: usize,
    pub appended: usize,
    /// Identical annotation already in the journal
    pub present: usize,
    /// Keys with no journal to annotate
    pub unknown: usize,
    /// Malformed or invalid rows
    pub skipped: usize,
}

/// Appends export rows as metadata records
pub struct Migrator<'a> {
    repo: &'a Repository,
    confidence: u8,
    dry_run: bool,
}

impl<'a> Migrator<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self {
            repo,
            confidence: DEFAULT_MIGRATION_CONFIDENCE,
            dry_run: false,
        }
    }

    pub fn confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn migrate_file(&self, path: &Path, date: NaiveDate) -> Result<MigrateReport, ImportError> {
        let handle = File::open(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "migrating export");
        self.migrate_reader(BufReader::new(handle), date)
    }

    pub fn migrate_reader<R: BufRead>(
        &self,
        reader: R,
        date: NaiveDate,
    ) -> Result<MigrateReport, ImportError> {
        let span = tracing::info_span!("migrate", %date, dry_run = self.dry_run);
        let _guard = span.enter();

        let mut report = MigrateReport::default();
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            let line_no = index + 1;

            let row = match parse_export_row(&line) {
                Ok(Some(row)) => row,
                Ok(None) => continue,
                Err(error) => {
                    tracing::warn!(line = line_no, %error, "skipping export row");
                    report.skipped += 1;
                    continue;
                }
            };
            report.rows += 1;

            let record = row.into_record(self.confidence, date);
            match self.migrate_record(&record) {
                Ok(Migrated::Appended) => report.appended += 1,
                Ok(Migrated::Present) => report.present += 1,
                Ok(Migrated::Unknown) => {
                    tracing::debug!(oui = %record.oui(), "no journal for key, skipping");
                    report.unknown += 1;
                }
                Err(error) if error.is_fatal() => return Err(error.into()),
                Err(error) => {
                    tracing::warn!(line = line_no, %error, "skipping invalid export row");
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            rows = report.rows,
            appended = report.appended,
            present = report.present,
            unknown = report.unknown,
            skipped = report.skipped,
            "export migrated"
        );
        Ok(report)
    }

    fn migrate_record(&self, record: &Record) -> Result<Migrated, StoreError> {
        let journal = self.repo.get(record.oui())?;
        if journal.is_empty() {
            return Ok(Migrated::Unknown);
        }
        let annotation = record.metadata_entry();
        let present = journal
            .iter()
            .any(|r| r.source() == MIGRATION_SOURCE && r.metadata_entry() == annotation);
        if present {
            return Ok(Migrated::Present);
        }
        if self.dry_run {
            record
                .verify()
                .map_err(|source| StoreError::InvalidRecord {
                    oui: record.oui().clone(),
                    source,
                })?;
        } else {
            self.repo.append(record)?;
        }
        Ok(Migrated::Appended)
    }
}

enum Migrated {
    Appended,
    Present,
    Unknown,
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
