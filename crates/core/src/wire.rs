// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record wire format
//!
//! On disk a record is a flat JSON object keyed by the historical field
//! names (`DeepMac`, `Source`, `EventType`, ...). Field names only exist
//! here; everything else works with [`Record`].

use crate::key::{Oui, OuiSize};
use crate::record::{
    EventType, MetadataEntry, Record, RecordBody, RecordError, RecordKind, RegistryEntry,
    DATE_FORMAT,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::PrettyFormatter;

/// Flat wire form of a record
///
/// Fields are declared in sorted key order so serialized objects come out
/// with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireRecord {
    #[serde(rename = "Confidence", default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i64>,
    #[serde(
        rename = "DeepMac",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub deep_mac: Option<String>,
    #[serde(
        rename = "DevModel",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_model: Option<String>,
    #[serde(
        rename = "DevType",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_type: Option<String>,
    #[serde(
        rename = "EventDate",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_date: Option<String>,
    #[serde(
        rename = "EventType",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<String>,
    #[serde(
        rename = "MACEnd",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mac_end: Option<String>,
    #[serde(
        rename = "MACStart",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mac_start: Option<String>,
    #[serde(
        rename = "MediaType",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub media_type: Option<String>,
    #[serde(
        rename = "Note",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
    #[serde(
        rename = "OUI",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub oui: Option<String>,
    #[serde(rename = "OUISize", default, skip_serializing_if = "Option::is_none")]
    pub oui_size: Option<u32>,
    #[serde(
        rename = "OrgAddress",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_address: Option<String>,
    #[serde(
        rename = "OrgCountry",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_country: Option<String>,
    #[serde(
        rename = "OrgName",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_name: Option<String>,
    #[serde(
        rename = "Source",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
    #[serde(
        rename = "WikiLink",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub wiki_link: Option<String>,
}

/// Text fields tolerate stray booleans and numbers from malformed source
/// data by taking their string form
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Flag(bool),
    Number(serde_json::Number),
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<LenientText>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LenientText::Text(s) => s,
        LenientText::Flag(b) => b.to_string(),
        LenientText::Number(n) => n.to_string(),
    }))
}

impl Record {
    /// Convert to the flat wire form
    pub fn to_wire(&self) -> WireRecord {
        let mut wire = WireRecord {
            deep_mac: Some(self.kind().as_str().to_string()),
            source: Some(self.source().to_string()),
            event_type: Some(self.event_type().as_str().to_string()),
            event_date: Some(self.event_date().format(DATE_FORMAT).to_string()),
            oui: Some(self.oui().to_string()),
            ..WireRecord::default()
        };

        match self.body() {
            RecordBody::Registry(entry) => {
                wire.oui_size = Some(self.oui().size().bits());
                wire.org_name = Some(entry.org_name.clone());
                wire.org_address = entry.org_address.clone();
                wire.org_country = entry.org_country.clone();
            }
            RecordBody::Metadata(entry) => {
                wire.mac_start = Some(entry.mac_start.clone());
                wire.mac_end = Some(entry.mac_end.clone());
                wire.confidence = Some(i64::from(entry.confidence));
                wire.media_type = entry.media_type.clone();
                wire.dev_type = entry.device_type.clone();
                wire.dev_model = entry.device_model.clone();
                wire.note = entry.note.clone();
                wire.wiki_link = entry.wiki_link.clone();
            }
        }
        wire
    }

    /// Decode and verify a wire record
    pub fn from_wire(wire: WireRecord) -> Result<Record, RecordError> {
        let kind = match wire.deep_mac.as_deref() {
            None => return Err(RecordError::Missing("DeepMac")),
            Some(tag) => RecordKind::parse(tag).ok_or_else(|| RecordError::Invalid {
                field: "DeepMac",
                reason: format!("unknown record type '{}'", tag),
            })?,
        };

        let source = wire.source.ok_or(RecordError::Missing("Source"))?;

        let event_type = match wire.event_type.as_deref() {
            None => return Err(RecordError::Missing("EventType")),
            Some(s) => EventType::parse(s).ok_or_else(|| RecordError::Invalid {
                field: "EventType",
                reason: format!("unknown event type '{}'", s),
            })?,
        };

        let event_date = match wire.event_date.as_deref() {
            None => return Err(RecordError::Missing("EventDate")),
            Some(s) => {
                NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| RecordError::Invalid {
                    field: "EventDate",
                    reason: format!("'{}': {}", s, e),
                })?
            }
        };

        let oui = decode_oui(wire.oui.as_deref(), kind, wire.oui_size)?;

        let record = match kind {
            RecordKind::Registry => {
                let org_name = wire.org_name.ok_or(RecordError::Missing("OrgName"))?;
                let entry = RegistryEntry {
                    org_name,
                    org_address: wire.org_address,
                    org_country: wire.org_country,
                };
                Record::registry(oui, source, event_type, event_date, entry)
            }
            RecordKind::Metadata => {
                let confidence = wire.confidence.ok_or(RecordError::Missing("Confidence"))?;
                let confidence = u8::try_from(confidence).map_err(|_| RecordError::Invalid {
                    field: "Confidence",
                    reason: format!("{} not in 1..=5", confidence),
                })?;
                let entry = MetadataEntry {
                    mac_start: wire.mac_start.ok_or(RecordError::Missing("MACStart"))?,
                    mac_end: wire.mac_end.ok_or(RecordError::Missing("MACEnd"))?,
                    confidence,
                    media_type: wire.media_type,
                    device_type: wire.dev_type,
                    device_model: wire.dev_model,
                    note: wire.note,
                    wiki_link: wire.wiki_link,
                };
                Record::metadata(oui, source, event_type, event_date, entry)
            }
        };

        record.verify()?;
        Ok(record)
    }

    /// Encode as a JSON value in wire form
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self.to_wire())
    }

    /// Decode and verify a JSON value in wire form
    pub fn from_value(value: serde_json::Value) -> Result<Record, RecordError> {
        let wire: WireRecord =
            serde_json::from_value(value).map_err(|e| RecordError::Invalid {
                field: "DeepMac",
                reason: format!("malformed record: {}", e),
            })?;
        Record::from_wire(wire)
    }

    /// Encode as a compact, key-sorted JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_wire())
    }

    /// Decode and verify a JSON string in wire form
    pub fn from_json(json: &str) -> Result<Record, RecordError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| RecordError::Invalid {
                field: "DeepMac",
                reason: format!("malformed JSON: {}", e),
            })?;
        Record::from_value(value)
    }
}

/// Body of a key's journal file: `{"recs": [...]}`
///
/// Elements stay as raw JSON until [`JournalFile::decode`] so one bad
/// element cannot spoil the rest of the journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalFile {
    #[serde(default)]
    pub recs: Vec<serde_json::Value>,
}

impl JournalFile {
    pub fn from_records(records: &[Record]) -> Result<Self, serde_json::Error> {
        Ok(Self {
            recs: records
                .iter()
                .map(Record::to_value)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Decode every element, returning the good records in file order and
    /// the index and error of each rejected element
    pub fn decode(self) -> (Vec<Record>, Vec<(usize, RecordError)>) {
        let mut records = Vec::with_capacity(self.recs.len());
        let mut rejected = Vec::new();
        for (index, value) in self.recs.into_iter().enumerate() {
            match Record::from_value(value) {
                Ok(record) => records.push(record),
                Err(e) => rejected.push((index, e)),
            }
        }
        (records, rejected)
    }

    /// Tab-indented JSON with sorted keys
    pub fn to_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut ser)?;
        out.push(b'\n');
        Ok(out)
    }
}

fn decode_oui(
    raw: Option<&str>,
    kind: RecordKind,
    size_bits: Option<u32>,
) -> Result<Oui, RecordError> {
    let raw = raw.ok_or(RecordError::Missing("OUI"))?;

    if kind == RecordKind::Registry {
        let bits = size_bits.ok_or(RecordError::Missing("OUISize"))?;
        let size = OuiSize::from_bits(bits).ok_or_else(|| RecordError::Invalid {
            field: "OUISize",
            reason: format!("{} is not 24, 28 or 36", bits),
        })?;
        if raw.len() != size.hex_len() {
            return Err(RecordError::Invalid {
                field: "OUI",
                reason: "incorrect length for OUI size".to_string(),
            });
        }
    }

    // Stored keys are already canonical; anything else is corruption
    match Oui::parse(raw) {
        Ok(oui) if oui.as_str() == raw => Ok(oui),
        Ok(_) | Err(_) => Err(RecordError::Invalid {
            field: "OUI",
            reason: format!("'{}' is not an uppercase hex key", raw),
        }),
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
