// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key enumeration specs

use crate::prelude::*;

#[test]
fn enumerate_skips_deleted_keys_by_default() {
    let temp = Project::imported();
    temp.oj()
        .args(&["enumerate"])
        .passes()
        .stdout_eq("00000C\n00000D\n00000F\n");
}

#[test]
fn enumerate_can_include_deleted_keys() {
    let temp = Project::imported();
    temp.oj()
        .args(&["enumerate", "--deleted"])
        .passes()
        .stdout_eq("00000C\n00000D\n00000E\n00000F\n");
}

#[test]
fn enumerate_can_leave_out_private_keys() {
    let temp = Project::configured("2015-01-01");
    temp.archive("2015-01-01", "oui.csv", DAY_ONE);
    temp.oj()
        .args(&["import", "--until", "2015-01-01"])
        .passes();

    temp.oj()
        .args(&["enumerate", "--no-private"])
        .passes()
        .stdout_eq("00000C\n00000E\n");
}

#[test]
fn enumerate_filters_by_size() {
    let temp = Project::imported();
    temp.oj()
        .args(&["enumerate", "--size", "28"])
        .passes()
        .stdout_eq("");
    temp.oj()
        .args(&["enumerate", "--size", "24"])
        .passes()
        .stdout_has("00000C");
}

#[test]
fn enumerate_rejects_unknown_size() {
    let temp = Project::imported();
    temp.oj()
        .args(&["enumerate", "--size", "48"])
        .fails()
        .stderr_has("expected 24, 28, 36 or all");
}
