// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tab-delimited registry rows
//!
//! Columns: key (hyphenated hex), sub-range start, organization name, up to
//! four address lines, a padding column, then the country. Private
//! registrations stop after the name.

use crate::file::RegistryFile;
use chrono::NaiveDate;
use oj_core::{EventType, KeyError, Oui, Record, RegistryEntry, PRIVATE};
use thiserror::Error;

/// Address used when a public row has no address lines
pub const NO_ADDRESS: &str = "Not listed in registry";

/// Country used when a public row has no country column
pub const NO_COUNTRY: &str = "Unspecified";

/// Joins address lines; a literal backslash-n, as stored in existing journals
const ADDRESS_SEPARATOR: &str = "\\n";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected at least 3 tab-separated fields, got {0}")]
    TooFewFields(usize),
    #[error("{file} row has no sub-range digits")]
    MissingSuffix { file: RegistryFile },
    #[error(transparent)]
    InvalidKey(#[from] KeyError),
    #[error("{oui} is not a {bits}-bit key")]
    WrongSize { oui: Oui, bits: u32 },
}

/// One parsed registry row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRow {
    pub oui: Oui,
    pub entry: RegistryEntry,
    /// Row is a private registration: `PRIVATE` name, blank name, or no
    /// columns after the name
    pub private: bool,
}

impl RegistryRow {
    /// Candidate journal record observed on `date`
    pub fn into_record(self, source: &str, date: NaiveDate) -> Record {
        Record::registry(self.oui, source, EventType::Add, date, self.entry)
    }
}

/// Parse one line of `file`; blank lines yield `None`
pub fn parse_row(file: RegistryFile, line: &str) -> Result<Option<RegistryRow>, RowError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return Err(RowError::TooFewFields(fields.len()));
    }

    let oui = parse_key(file, fields[0], fields[1])?;
    let name = fields[2];

    let private = fields.len() == 3
        || name.trim().is_empty()
        || name.trim().eq_ignore_ascii_case(PRIVATE);
    let entry = if private {
        RegistryEntry::private(name)
    } else {
        RegistryEntry::public(name, address(&fields), country(&fields))
    };

    Ok(Some(RegistryRow { oui, entry, private }))
}

fn parse_key(file: RegistryFile, base: &str, range: &str) -> Result<Oui, RowError> {
    let mut key: String = base.chars().filter(|c| *c != '-').collect();

    let suffix_len = file.size().hex_len() - 6;
    if suffix_len > 0 {
        let suffix = range
            .get(..suffix_len)
            .ok_or(RowError::MissingSuffix { file })?;
        key.push_str(suffix);
    }

    let oui = Oui::parse(&key)?;
    if oui.size() != file.size() {
        return Err(RowError::WrongSize {
            oui,
            bits: file.size().bits(),
        });
    }
    Ok(oui)
}

fn address(fields: &[&str]) -> String {
    let end = fields.len().min(7);
    let lines = fields.get(3..end).unwrap_or_default();
    // Only whitespace is trimmed; separators from empty lines stay, as in
    // existing journals
    let joined = lines.join(ADDRESS_SEPARATOR);
    let address = joined.trim();
    if address.is_empty() {
        NO_ADDRESS.to_string()
    } else {
        address.to_string()
    }
}

fn country(fields: &[&str]) -> String {
    match fields.get(8) {
        Some(country) if !country.trim().is_empty() => (*country).to_string(),
        _ => NO_COUNTRY.to_string(),
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
