// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal directory layout
//!
//! Each key lives in its own directory: the first six hex digits are split
//! into three two-digit levels and any remaining digits form a fourth level,
//! so `0050C2ABC` maps to `<base>/00/50/C2/ABC/`.

use crate::key::Oui;
use std::path::{Component, Path, PathBuf};

/// Journal file inside a key directory
pub const JOURNAL_FILE: &str = "records";

/// Marker present iff the key is flagged private
pub const PRIVATE_MARKER: &str = ".private";

/// Marker present iff the key is flagged deleted
pub const DELETED_MARKER: &str = ".deleted";

/// Writer lock file at the repository root
pub const LOCK_FILE: &str = ".oj.lock";

/// Directory holding the journal and markers for `oui`
pub fn oui_path(base: &Path, oui: &Oui) -> PathBuf {
    let key = oui.as_str();
    let mut path = base.join(&key[0..2]).join(&key[2..4]).join(&key[4..6]);
    if !oui.suffix().is_empty() {
        path.push(oui.suffix());
    }
    path
}

/// Recover the key from a key directory, if `dir` is one
pub fn oui_from_path(base: &Path, dir: &Path) -> Option<Oui> {
    let relative = dir.strip_prefix(base).ok()?;

    let mut key = String::new();
    let mut levels = 0;
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        let part = part.to_str()?;
        // The first three levels are exactly two digits each
        if levels < 3 && part.len() != 2 {
            return None;
        }
        key.push_str(part);
        levels += 1;
    }

    if !(3..=4).contains(&levels) {
        return None;
    }
    let oui = Oui::parse(&key).ok()?;
    // Lowercase directories are not ours
    (oui.as_str() == key).then_some(oui)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
