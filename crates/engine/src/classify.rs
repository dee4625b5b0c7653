// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change detection
//!
//! Decides what a freshly observed registry entry means for a key, given
//! the key's journal. Pure: no storage access, no side effects.

use oj_core::{EventType, Oui, Record, RegistryEntry};

/// Keys published twice, with contradicting content, in the upstream
/// registry. Differences on these keys are ignored.
pub const DUPLICATE_OUIS: [&str; 2] = ["0001C8", "080030"];

/// [`DUPLICATE_OUIS`] as keys
pub fn default_whitelist() -> Vec<Oui> {
    DUPLICATE_OUIS
        .iter()
        .filter_map(|key| Oui::parse(key).ok())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// Candidate matches the last record
    Unchanged,
    /// Key is a known upstream duplicate
    Whitelisted,
    /// A private entry lost its name; not a real change
    PrivateNameBlanked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append the candidate with this event type
    Append(EventType),
    Suppress(SuppressReason),
}

/// Journal append plus the flag updates that go with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    /// New private flag value, if it changes
    pub private: Option<bool>,
    /// New deleted flag value, if it changes
    pub deleted: Option<bool>,
}

impl Decision {
    fn append(event_type: EventType) -> Self {
        Self {
            action: Action::Append(event_type),
            private: None,
            deleted: None,
        }
    }

    fn suppress(reason: SuppressReason) -> Self {
        Self {
            action: Action::Suppress(reason),
            private: None,
            deleted: None,
        }
    }

    fn private(mut self, value: Option<bool>) -> Self {
        self.private = value;
        self
    }

    fn deleted(mut self, value: bool) -> Self {
        self.deleted = Some(value);
        self
    }

    pub fn event_type(&self) -> Option<EventType> {
        match self.action {
            Action::Append(event_type) => Some(event_type),
            Action::Suppress(_) => None,
        }
    }

    /// Key comes back after a deletion
    pub fn is_restore(&self) -> bool {
        self.deleted == Some(false)
    }
}

/// Classify `candidate` against `journal`
///
/// The last registry record in append order is the reference; metadata
/// annotations are never compared. Metadata candidates are appended as
/// given.
pub fn classify(candidate: &Record, journal: &[Record], whitelist: &[Oui]) -> Decision {
    let Some(entry) = candidate.registry_entry() else {
        return Decision::append(candidate.event_type());
    };

    let last = journal
        .iter()
        .rev()
        .find_map(|r| r.registry_entry().map(|e| (r.is_delete(), e)));
    let Some((was_deleted, last)) = last else {
        let private = entry.is_private_registration().then_some(true);
        return Decision::append(EventType::Add).private(private);
    };

    if entry.same_content(last) {
        return if was_deleted {
            Decision::append(EventType::Add).deleted(false)
        } else {
            Decision::suppress(SuppressReason::Unchanged)
        };
    }

    if whitelist.contains(candidate.oui()) {
        return Decision::suppress(SuppressReason::Whitelisted);
    }

    if was_deleted {
        let private = if entry.is_private_registration() {
            Some(true)
        } else if last.is_private_registration() {
            Some(false)
        } else {
            None
        };
        return Decision::append(EventType::Add)
            .deleted(false)
            .private(private);
    }

    if last.has_private_name() && entry.org_name.trim().is_empty() {
        return Decision::suppress(SuppressReason::PrivateNameBlanked);
    }

    Decision::append(EventType::Change).private(private_flip(last, entry))
}

fn private_flip(last: &RegistryEntry, next: &RegistryEntry) -> Option<bool> {
    let now = next.is_private_registration();
    (now != last.is_private_registration()).then_some(now)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
