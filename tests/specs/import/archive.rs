// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Archive import specs
//!
//! Verify day-by-day import, change detection and the deletion sweep.

use crate::prelude::*;

#[test]
fn import_reports_each_batch() {
    let temp = Project::configured("2015-01-01");
    temp.archive("2015-01-01", "oui.csv", DAY_ONE);
    temp.archive("2015-01-02", "oui.csv", DAY_TWO);

    temp.oj()
        .args(&["import", "--until", "2015-01-02"])
        .passes()
        .stdout_has("2015-01-01 oui.csv")
        .stdout_has("3 rows: 3 added, 0 changed, 0 restored, 0 unchanged, 0 skipped, 0 deleted")
        .stdout_has("3 rows: 1 added, 1 changed, 0 restored, 1 unchanged, 0 skipped, 1 deleted");
}

#[test]
fn import_advances_last_date() {
    let temp = Project::imported();
    assert!(temp.read_config().contains("last_date = \"2015-01-03\""));
}

#[test]
fn import_resumes_from_last_date() {
    let temp = Project::imported();
    temp.archive("2015-01-03", "oui.csv", DAY_TWO);

    temp.oj()
        .args(&["import", "--until", "2015-01-03"])
        .passes()
        .stdout_has("2015-01-03 oui.csv")
        .stdout_lacks("2015-01-01")
        .stdout_has("3 rows: 0 added, 0 changed, 0 restored, 3 unchanged, 0 skipped, 0 deleted");
    assert!(temp.read_config().contains("last_date = \"2015-01-04\""));
}

#[test]
fn empty_range_imports_nothing() {
    let temp = Project::configured("2015-01-01");
    temp.oj()
        .args(&["import", "--until", "2015-01-05"])
        .passes()
        .stdout_eq("Nothing archived since 2015-01-01\n");
    assert!(temp.read_config().contains("last_date = \"2015-01-06\""));
}

#[test]
fn deleted_key_is_restored_when_it_reappears() {
    let temp = Project::imported();
    temp.archive("2015-01-03", "oui.csv", DAY_ONE);

    temp.oj()
        .args(&["import", "--until", "2015-01-03"])
        .passes()
        .stdout_has("1 restored");

    temp.oj()
        .args(&["flags", "00000E"])
        .passes()
        .stdout_eq("private: false\ndeleted: false\n");
}

#[test]
fn log_file_receives_import_logs() {
    let temp = Project::configured("2015-01-01");
    temp.write_config("last_date = \"2015-01-01\"\nlog_file = \"logs/import.log\"\n");
    temp.archive("2015-01-01", "oui.csv", DAY_ONE);

    temp.oj().args(&["import", "--until", "2015-01-01"]).passes();

    let log = std::fs::read_to_string(temp.path().join("logs/import.log")).unwrap();
    assert!(log.contains("import position saved"), "log was:\n{}", log);
}
