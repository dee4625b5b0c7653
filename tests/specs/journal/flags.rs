// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag display specs

use crate::prelude::*;

#[test]
fn flags_follow_registry_changes() {
    let temp = Project::configured("2015-01-01");
    temp.archive("2015-01-01", "oui.csv", DAY_ONE);
    temp.oj()
        .args(&["import", "--until", "2015-01-01"])
        .passes();

    temp.oj()
        .args(&["flags", "00000D"])
        .passes()
        .stdout_eq("private: true\ndeleted: false\n");

    temp.archive("2015-01-02", "oui.csv", DAY_TWO);
    temp.oj()
        .args(&["import", "--until", "2015-01-02"])
        .passes();

    temp.oj()
        .args(&["flags", "00000D"])
        .passes()
        .stdout_eq("private: false\ndeleted: false\n");
    temp.oj()
        .args(&["flags", "00000E"])
        .passes()
        .stdout_eq("private: false\ndeleted: true\n");
}

#[test]
fn flags_unknown_for_missing_key() {
    let temp = Project::configured("2015-01-01");
    temp.oj()
        .args(&["flags", "AABBCC"])
        .passes()
        .stdout_eq("private: unknown\ndeleted: unknown\n");
}
