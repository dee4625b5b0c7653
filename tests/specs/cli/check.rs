// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key normalization specs

use crate::prelude::*;

#[test]
fn check_normalizes_separators_and_case() {
    let temp = Project::empty();
    temp.oj()
        .args(&["check", "00:00:0c", "70-b3-d5-e", "0050C2ABC"])
        .passes()
        .stdout_eq("00000C (24-bit)\n70B3D5E (28-bit)\n0050C2ABC (36-bit)\n");
}

#[test]
fn check_rejects_wrong_length() {
    let temp = Project::empty();
    temp.oj()
        .args(&["check", "00000C0"])
        .passes()
        .stdout_eq("00000C0 (28-bit)\n");

    temp.oj()
        .args(&["check", "00000C00"])
        .fails()
        .stderr_has("expected 6, 7 or 9 hex digits");
}

#[test]
fn check_rejects_non_hex() {
    let temp = Project::empty();
    temp.oj()
        .args(&["check", "00000G", "00000C"])
        .fails()
        .stdout_has("00000C (24-bit)")
        .stderr_has("non-hex character 'G'")
        .stderr_has("1 invalid key(s)");
}
