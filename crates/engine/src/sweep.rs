// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deletion sweep
//!
//! After a registry file is processed, every key that file owns but did not
//! list gets a delete record and the deleted flag.

use chrono::NaiveDate;
use oj_core::{last_registry_record, EventType, Oui, Record, SizeFilter};
use oj_registry::RegistryFile;
use oj_storage::{EnumerateFilter, Repository, StoreError};
use std::collections::HashSet;

/// Delete records for keys owned by `file` but missing from `seen`, in key
/// order, without writing them
///
/// Each is templated from the key's last registry record. Keys already
/// flagged deleted are skipped, as are keys with no registry record.
pub fn plan_sweep(
    repo: &Repository,
    file: RegistryFile,
    seen: &HashSet<Oui>,
    date: NaiveDate,
) -> Result<Vec<Record>, StoreError> {
    let mut missing: Vec<Oui> = repo
        .enumerate(EnumerateFilter::new(SizeFilter::Only(file.size())))?
        .into_iter()
        .filter(|oui| file.owns(oui) && !seen.contains(oui))
        .collect();
    missing.sort();

    let mut deletions = Vec::with_capacity(missing.len());
    for oui in missing {
        let journal = repo.get(&oui)?;
        match last_registry_record(&journal) {
            Some(last) => deletions.push(last.with_event(EventType::Delete, date)),
            None => tracing::warn!(%oui, %file, "no registry record to template deletion from"),
        }
    }
    Ok(deletions)
}

/// Append a delete record and set the deleted flag for every key `file`
/// no longer lists; returns the swept keys
pub fn sweep(
    repo: &Repository,
    file: RegistryFile,
    seen: &HashSet<Oui>,
    date: NaiveDate,
) -> Result<Vec<Oui>, StoreError> {
    let span = tracing::info_span!("sweep", %file, %date);
    let _guard = span.enter();

    let deletions = plan_sweep(repo, file, seen, date)?;
    let mut swept = Vec::with_capacity(deletions.len());
    for record in deletions {
        repo.append(&record)?;
        repo.set_deleted(record.oui(), true)?;
        tracing::info!(oui = %record.oui(), "marked deleted");
        swept.push(record.oui().clone());
    }
    Ok(swept)
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
