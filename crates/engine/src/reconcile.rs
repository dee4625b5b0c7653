// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applies classification decisions to a repository

use crate::classify::{classify, default_whitelist, Action, Decision};
use oj_core::{Oui, Record};
use oj_storage::{Flag, FlagWrite, Repository, StoreError};

/// What happened to one observed candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub decision: Decision,
    /// Record appended (or that would be, in a dry run)
    pub appended: Option<Record>,
}

/// Reads a key's journal, classifies the candidate, then appends and
/// updates flags together
///
/// Every flag transition for observed keys goes through here.
pub struct Reconciler<'a> {
    repo: &'a Repository,
    whitelist: Vec<Oui>,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self {
            repo,
            whitelist: default_whitelist(),
            dry_run: false,
        }
    }

    pub fn with_whitelist(mut self, whitelist: Vec<Oui>) -> Self {
        self.whitelist = whitelist;
        self
    }

    /// Classify without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn repository(&self) -> &'a Repository {
        self.repo
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn observe(&self, candidate: Record) -> Result<Outcome, StoreError> {
        let span = tracing::debug_span!("reconcile", oui = %candidate.oui());
        let _guard = span.enter();

        let journal = self.repo.get(candidate.oui())?;
        let decision = classify(&candidate, &journal, &self.whitelist);

        let appended = match decision.action {
            Action::Suppress(reason) => {
                tracing::debug!(?reason, "no change recorded");
                None
            }
            Action::Append(event_type) => {
                let record = candidate.with_event(event_type, candidate.event_date());
                if !self.dry_run {
                    self.repo.append(&record)?;
                }
                tracing::debug!(
                    event = %event_type,
                    private = ?decision.private,
                    deleted = ?decision.deleted,
                    "recorded"
                );
                Some(record)
            }
        };

        if !self.dry_run {
            if let Some(value) = decision.private {
                self.set_flag(candidate.oui(), Flag::Private, value)?;
            }
            if let Some(value) = decision.deleted {
                self.set_flag(candidate.oui(), Flag::Deleted, value)?;
            }
        }

        Ok(Outcome { decision, appended })
    }

    fn set_flag(&self, oui: &Oui, flag: Flag, value: bool) -> Result<(), StoreError> {
        if self.repo.set_flag(oui, flag, value)? == FlagWrite::UnknownKey {
            tracing::warn!(%oui, %flag, value, "flag not set, key has no journal");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
