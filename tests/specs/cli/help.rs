// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    temp.oj()
        .args(&["--help"])
        .passes()
        .stdout_has("import")
        .stdout_has("migrate")
        .stdout_has("show")
        .stdout_has("enumerate")
        .stdout_has("flags")
        .stdout_has("check");
}

#[test]
fn import_help_documents_dry_run() {
    let temp = Project::empty();
    temp.oj()
        .args(&["import", "--help"])
        .passes()
        .stdout_has("--dry-run")
        .stdout_has("--until");
}

#[test]
fn bash_completions_mention_binary() {
    let temp = Project::empty();
    temp.oj()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("oj");
}
