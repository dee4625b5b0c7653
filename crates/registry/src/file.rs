// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The four registry dumps published each day

use oj_core::{Oui, OuiSize};
use std::fmt;

/// MA-L prefixes of the legacy IAB block
///
/// IAB keys are 36-bit like MA-S keys but are published in their own file.
pub const IAB_PREFIXES: [&str; 2] = ["0050C2", "40D855"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryFile {
    /// MA-L, `oui.csv`
    Oui24,
    /// MA-M, `oui28.csv`
    Oui28,
    /// MA-S, `oui36.csv`
    Oui36,
    /// Legacy IAB, `iab.csv`
    Iab,
}

impl RegistryFile {
    /// Processing order within one day
    pub const ALL: [RegistryFile; 4] = [
        RegistryFile::Oui24,
        RegistryFile::Oui28,
        RegistryFile::Oui36,
        RegistryFile::Iab,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            RegistryFile::Oui24 => "oui.csv",
            RegistryFile::Oui28 => "oui28.csv",
            RegistryFile::Oui36 => "oui36.csv",
            RegistryFile::Iab => "iab.csv",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.file_name() == name)
    }

    pub fn size(self) -> OuiSize {
        match self {
            RegistryFile::Oui24 => OuiSize::Bits24,
            RegistryFile::Oui28 => OuiSize::Bits28,
            RegistryFile::Oui36 | RegistryFile::Iab => OuiSize::Bits36,
        }
    }

    /// Whether `oui` is published in this file
    ///
    /// Both 36-bit files share a size, so a key missing from one of them is
    /// only missing if the other does not own it.
    pub fn owns(self, oui: &Oui) -> bool {
        if oui.size() != self.size() {
            return false;
        }
        let iab = IAB_PREFIXES.iter().any(|p| *p == oui.prefix());
        match self {
            RegistryFile::Oui36 => !iab,
            RegistryFile::Iab => iab,
            RegistryFile::Oui24 | RegistryFile::Oui28 => true,
        }
    }
}

impl fmt::Display for RegistryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.file_name())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
