// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OUI keys and their sizes
//!
//! A key is the hex prefix of a hardware address as published in the IEEE
//! registries: 6 digits for MA-L (24-bit), 7 for MA-M (28-bit) and 9 for
//! MA-S/IAB (36-bit). Colons and hyphens are accepted as separators and
//! stripped; the canonical form is uppercase hex with no separators.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while normalizing a key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid OUI '{raw}': expected 6, 7 or 9 hex digits, got {len}")]
    Length { raw: String, len: usize },
    #[error("invalid OUI '{raw}': non-hex character '{ch}'")]
    NonHex { raw: String, ch: char },
}

/// Registry block size, in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OuiSize {
    Bits24,
    Bits28,
    Bits36,
}

impl OuiSize {
    pub const ALL: [OuiSize; 3] = [OuiSize::Bits24, OuiSize::Bits28, OuiSize::Bits36];

    pub fn bits(self) -> u32 {
        match self {
            OuiSize::Bits24 => 24,
            OuiSize::Bits28 => 28,
            OuiSize::Bits36 => 36,
        }
    }

    /// Number of hex digits in a key of this size
    pub fn hex_len(self) -> usize {
        (self.bits() / 4) as usize
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            24 => Some(OuiSize::Bits24),
            28 => Some(OuiSize::Bits28),
            36 => Some(OuiSize::Bits36),
            _ => None,
        }
    }

    pub fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            6 => Some(OuiSize::Bits24),
            7 => Some(OuiSize::Bits28),
            9 => Some(OuiSize::Bits36),
            _ => None,
        }
    }
}

impl fmt::Display for OuiSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Size selection for enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    All,
    Only(OuiSize),
}

impl SizeFilter {
    pub fn matches(self, oui: &Oui) -> bool {
        match self {
            SizeFilter::All => true,
            SizeFilter::Only(size) => oui.size() == size,
        }
    }
}

impl FromStr for SizeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s == "0" {
            return Ok(SizeFilter::All);
        }
        s.parse::<u32>()
            .ok()
            .and_then(OuiSize::from_bits)
            .map(SizeFilter::Only)
            .ok_or_else(|| format!("invalid OUI size '{}': expected 24, 28, 36 or all", s))
    }
}

/// A normalized OUI key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oui(String);

impl Oui {
    /// Validate and canonicalize a raw key string
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        let stripped: String = raw.chars().filter(|c| *c != ':' && *c != '-').collect();

        let len = stripped.chars().count();
        if OuiSize::from_hex_len(len).is_none() {
            return Err(KeyError::Length {
                raw: raw.to_string(),
                len,
            });
        }

        if let Some(ch) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(KeyError::NonHex {
                raw: raw.to_string(),
                ch,
            });
        }

        Ok(Oui(stripped.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn size(&self) -> OuiSize {
        // Length was checked in parse()
        OuiSize::from_hex_len(self.0.len()).unwrap_or(OuiSize::Bits24)
    }

    /// The MA-L portion of the key (first 6 hex digits)
    pub fn prefix(&self) -> &str {
        &self.0[..6]
    }

    /// The digits past the MA-L portion, empty for 24-bit keys
    pub fn suffix(&self) -> &str {
        &self.0[6..]
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Oui {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Oui::parse(s)
    }
}

impl AsRef<str> for Oui {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Oui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Oui {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Oui::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
