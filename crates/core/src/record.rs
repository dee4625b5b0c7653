// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal records
//!
//! A record is one dated event in a key's journal. Registry records are
//! snapshots of the upstream registry entry; metadata records annotate a
//! MAC range under the key with device information from other sources.
//! Records are plain values: construct them, [`Record::verify`] them, and
//! derive new ones with [`Record::with_event`] rather than mutating.

use crate::key::Oui;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Organization name used by the registry for private registrations, and
/// the sentinel reported for their address and country
pub const PRIVATE: &str = "PRIVATE";

/// Wire format for event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from record verification or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("required field '{0}' missing")]
    Missing(&'static str),
    #[error("field '{field}' has illegal value: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl RecordError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Kind of journal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Add,
    Change,
    Delete,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Add => "add",
            EventType::Change => "change",
            EventType::Delete => "delete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(EventType::Add),
            "change" => Some(EventType::Change),
            "delete" => Some(EventType::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Record variant tag (`DeepMac` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Registry,
    Metadata,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Registry => "registry",
            RecordKind::Metadata => "metadata",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "registry" => Some(RecordKind::Registry),
            "metadata" => Some(RecordKind::Metadata),
            _ => None,
        }
    }
}

/// Snapshot of an upstream registry entry
///
/// Address and country are absent for private registrations. An entry whose
/// organization name is `PRIVATE` never carries them, even if given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub org_name: String,
    pub org_address: Option<String>,
    pub org_country: Option<String>,
}

impl RegistryEntry {
    pub fn public(
        org_name: impl Into<String>,
        org_address: impl Into<String>,
        org_country: impl Into<String>,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            org_address: Some(org_address.into()),
            org_country: Some(org_country.into()),
        }
    }

    pub fn private(org_name: impl Into<String>) -> Self {
        Self {
            org_name: org_name.into(),
            org_address: None,
            org_country: None,
        }
    }

    /// Organization name is the registry's private marker (any case)
    pub fn has_private_name(&self) -> bool {
        self.org_name.trim().eq_ignore_ascii_case(PRIVATE)
    }

    /// Entry counts as a private registration: a `PRIVATE` name, a blank
    /// name, or no address data at all
    pub fn is_private_registration(&self) -> bool {
        self.has_private_name()
            || self.org_name.trim().is_empty()
            || (self.org_address.is_none() && self.org_country.is_none())
    }

    /// Address, or the `PRIVATE` sentinel for privately named entries
    pub fn address(&self) -> Option<&str> {
        if self.has_private_name() {
            Some(PRIVATE)
        } else {
            self.org_address.as_deref()
        }
    }

    /// Country, or the `PRIVATE` sentinel for privately named entries
    pub fn country(&self) -> Option<&str> {
        if self.has_private_name() {
            Some(PRIVATE)
        } else {
            self.org_country.as_deref()
        }
    }

    /// Case-insensitive comparison of name, address and country
    pub fn same_content(&self, other: &RegistryEntry) -> bool {
        eq_ignore_case(Some(&self.org_name), Some(&other.org_name))
            && eq_ignore_case(self.address(), other.address())
            && eq_ignore_case(self.country(), other.country())
    }

    fn verify(&self) -> Result<(), RecordError> {
        if self.is_private_registration() {
            // Address data is optional here, but never an empty string
            for (field, value) in [
                ("OrgAddress", &self.org_address),
                ("OrgCountry", &self.org_country),
            ] {
                if value.as_deref().is_some_and(str::is_empty) {
                    return Err(RecordError::invalid(field, "empty"));
                }
            }
            return Ok(());
        }

        match self.org_address.as_deref() {
            None => return Err(RecordError::Missing("OrgAddress")),
            Some("") => return Err(RecordError::invalid("OrgAddress", "empty")),
            Some(_) => {}
        }
        match self.org_country.as_deref() {
            None => return Err(RecordError::Missing("OrgCountry")),
            Some("") => return Err(RecordError::invalid("OrgCountry", "empty")),
            Some(_) => {}
        }
        Ok(())
    }
}

fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || a.to_lowercase() == b.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}

/// Device annotation for a MAC range under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    /// First address of the range, 12 uppercase hex digits
    pub mac_start: String,
    /// Last address of the range (inclusive)
    pub mac_end: String,
    /// 1 (guess) to 5 (certain)
    pub confidence: u8,
    pub media_type: Option<String>,
    pub device_type: Option<String>,
    pub device_model: Option<String>,
    pub note: Option<String>,
    pub wiki_link: Option<String>,
}

impl MetadataEntry {
    pub fn new(mac_start: impl Into<String>, mac_end: impl Into<String>, confidence: u8) -> Self {
        Self {
            mac_start: mac_start.into(),
            mac_end: mac_end.into(),
            confidence,
            media_type: None,
            device_type: None,
            device_model: None,
            note: None,
            wiki_link: None,
        }
    }

    fn verify(&self) -> Result<(), RecordError> {
        verify_mac("MACStart", &self.mac_start)?;
        verify_mac("MACEnd", &self.mac_end)?;
        if self.mac_start > self.mac_end {
            return Err(RecordError::invalid("MACEnd", "range ends before it starts"));
        }

        if !(1..=5).contains(&self.confidence) {
            return Err(RecordError::invalid(
                "Confidence",
                format!("{} not in 1..=5", self.confidence),
            ));
        }

        for (field, value) in [
            ("MediaType", &self.media_type),
            ("DevType", &self.device_type),
            ("DevModel", &self.device_model),
            ("Note", &self.note),
            ("WikiLink", &self.wiki_link),
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                return Err(RecordError::invalid(field, "empty"));
            }
        }
        Ok(())
    }
}

fn verify_mac(field: &'static str, mac: &str) -> Result<(), RecordError> {
    if mac.len() != 12 {
        return Err(RecordError::invalid(field, "incorrect length"));
    }
    if !mac.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')) {
        return Err(RecordError::invalid(field, "invalid hex digits"));
    }
    Ok(())
}

/// Variant-specific record payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Registry(RegistryEntry),
    Metadata(MetadataEntry),
}

/// One journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    oui: Oui,
    source: String,
    event_type: EventType,
    event_date: NaiveDate,
    body: RecordBody,
}

impl Record {
    pub fn registry(
        oui: Oui,
        source: impl Into<String>,
        event_type: EventType,
        event_date: NaiveDate,
        mut entry: RegistryEntry,
    ) -> Self {
        if entry.has_private_name() {
            entry.org_address = None;
            entry.org_country = None;
        }
        Self {
            oui,
            source: source.into(),
            event_type,
            event_date,
            body: RecordBody::Registry(entry),
        }
    }

    pub fn metadata(
        oui: Oui,
        source: impl Into<String>,
        event_type: EventType,
        event_date: NaiveDate,
        entry: MetadataEntry,
    ) -> Self {
        Self {
            oui,
            source: source.into(),
            event_type,
            event_date,
            body: RecordBody::Metadata(entry),
        }
    }

    /// Same record with a different event type and date
    pub fn with_event(&self, event_type: EventType, event_date: NaiveDate) -> Self {
        Self {
            event_type,
            event_date,
            ..self.clone()
        }
    }

    pub fn oui(&self) -> &Oui {
        &self.oui
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    pub fn body(&self) -> &RecordBody {
        &self.body
    }

    pub fn kind(&self) -> RecordKind {
        match self.body {
            RecordBody::Registry(_) => RecordKind::Registry,
            RecordBody::Metadata(_) => RecordKind::Metadata,
        }
    }

    pub fn registry_entry(&self) -> Option<&RegistryEntry> {
        match &self.body {
            RecordBody::Registry(entry) => Some(entry),
            RecordBody::Metadata(_) => None,
        }
    }

    pub fn metadata_entry(&self) -> Option<&MetadataEntry> {
        match &self.body {
            RecordBody::Metadata(entry) => Some(entry),
            RecordBody::Registry(_) => None,
        }
    }

    pub fn is_delete(&self) -> bool {
        self.event_type == EventType::Delete
    }

    /// Check the field rules for this record's variant
    ///
    /// Invalid records must never reach storage.
    pub fn verify(&self) -> Result<(), RecordError> {
        if self.source.trim().is_empty() {
            return Err(RecordError::invalid("Source", "empty"));
        }
        match &self.body {
            RecordBody::Registry(entry) => entry.verify(),
            RecordBody::Metadata(entry) => entry.verify(),
        }
    }
}

/// Orders records by event date and nothing else.
///
/// Records sharing a date compare `Equal` whatever their content, so this is
/// only for sorting, never for equality.
pub fn by_event_date(a: &Record, b: &Record) -> Ordering {
    a.event_date.cmp(&b.event_date)
}

/// Stable chronological sort; records sharing a date keep journal order
pub fn sort_chronological(records: &mut [Record]) {
    records.sort_by(by_event_date);
}

/// Case-insensitive comparison of the organization data of two registry
/// records; metadata records never match
pub fn same_registry_content(a: &Record, b: &Record) -> bool {
    match (a.registry_entry(), b.registry_entry()) {
        (Some(a), Some(b)) => a.same_content(b),
        _ => false,
    }
}

/// The most recently appended registry record, skipping metadata annotations
pub fn last_registry_record(journal: &[Record]) -> Option<&Record> {
    journal
        .iter()
        .rev()
        .find(|r| r.kind() == RecordKind::Registry)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
