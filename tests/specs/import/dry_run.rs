// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dry-run import specs

use crate::prelude::*;

#[test]
fn dry_run_reports_without_writing() {
    let temp = Project::configured("2015-01-01");
    temp.archive("2015-01-01", "oui.csv", DAY_ONE);
    let before = temp.read_config();

    temp.oj()
        .args(&["import", "--until", "2015-01-01", "--dry-run"])
        .passes()
        .stdout_has("3 rows: 3 added")
        .stdout_has("Dry run");

    assert_eq!(temp.read_config(), before);
    temp.oj().args(&["enumerate"]).passes().stdout_eq("");
}

#[test]
fn dry_run_plans_deletions() {
    let temp = Project::imported();
    temp.archive("2015-01-04", "oui.csv", "");

    temp.oj()
        .args(&["import", "--from", "2015-01-04", "--until", "2015-01-04", "--dry-run"])
        .passes()
        .stdout_has("0 rows")
        .stdout_has("3 deleted");

    temp.oj()
        .args(&["flags", "00000C"])
        .passes()
        .stdout_has("deleted: false");
}
