// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs

use crate::prelude::*;

#[test]
fn show_without_config_or_journal_fails() {
    let temp = Project::empty();
    temp.oj()
        .args(&["show", "00000C"])
        .fails()
        .stderr_has("no journal directory");
}

#[test]
fn missing_journal_directory_fails() {
    let temp = Project::empty();
    temp.oj()
        .args(&["--journal", "does-not-exist", "enumerate"])
        .fails()
        .stderr_has("does-not-exist");
}

#[test]
fn invalid_key_fails() {
    let temp = Project::configured("2015-01-01");
    temp.oj()
        .args(&["show", "not-a-key"])
        .fails()
        .stderr_has("invalid OUI");
}

#[test]
fn unreadable_config_fails() {
    let temp = Project::empty();
    temp.file("import.toml", "journal_dir = [");
    temp.oj()
        .args(&["enumerate"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn import_without_start_date_fails() {
    let temp = Project::configured("2015-01-01");
    temp.write_config("");
    temp.oj()
        .args(&["import"])
        .fails()
        .stderr_has("no start date");
}
