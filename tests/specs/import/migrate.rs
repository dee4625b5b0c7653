// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DeepMac export migration specs

use crate::prelude::*;

const EXPORT: &str = "\
00000C\t1\tCisco Systems\tEthernet\tRouter\tNULL\tCore routers
AABBCC\t2\tUnknown Corp\tWiFi\tNULL\tNULL\tNULL
";

#[test]
fn migrate_annotates_journaled_keys_only() {
    let temp = Project::imported();
    temp.file("mysql-export.csv", EXPORT);

    temp.oj()
        .args(&["migrate", "mysql-export.csv", "--date", "2015-06-10"])
        .passes()
        .stdout_eq("2 rows: 1 annotated, 0 already present, 1 without journal, 0 skipped\n");

    temp.oj()
        .args(&["show", "00000C", "--json"])
        .passes()
        .stdout_has("DeepMac project")
        .stdout_has("00000CFFFFFF")
        .stdout_has("Core routers");
    temp.oj()
        .args(&["show", "AABBCC"])
        .passes()
        .stdout_eq("No records for AABBCC\n");
}

#[test]
fn migrate_twice_is_a_no_op() {
    let temp = Project::imported();
    temp.file("mysql-export.csv", EXPORT);
    temp.oj()
        .args(&["migrate", "mysql-export.csv", "--date", "2015-06-10"])
        .passes();

    temp.oj()
        .args(&["migrate", "mysql-export.csv", "--date", "2015-06-11"])
        .passes()
        .stdout_has("0 annotated, 1 already present");
}

#[test]
fn migrate_dry_run_leaves_journal_unchanged() {
    let temp = Project::imported();
    temp.file("mysql-export.csv", EXPORT);

    temp.oj()
        .args(&["migrate", "mysql-export.csv", "--dry-run"])
        .passes()
        .stdout_has("1 annotated")
        .stdout_has("Dry run");
    temp.oj()
        .args(&["show", "00000C", "--json"])
        .passes()
        .stdout_lacks("DeepMac project");
}

#[test]
fn migrate_rejects_out_of_range_confidence() {
    let temp = Project::imported();
    temp.file("mysql-export.csv", EXPORT);
    temp.oj()
        .args(&["migrate", "mysql-export.csv", "--confidence", "7"])
        .fails()
        .stderr_has("confidence must be between 1 and 5");
}

#[test]
fn migrate_reports_missing_export() {
    let temp = Project::imported();
    temp.oj()
        .args(&["migrate", "missing.csv"])
        .fails()
        .stderr_has("missing.csv");
}
