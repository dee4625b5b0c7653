// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal display specs

use crate::prelude::*;

#[test]
fn show_prints_journal_in_order() {
    let temp = Project::imported();
    let out = temp
        .oj()
        .args(&["show", "00:00:0e"])
        .passes()
        .stdout();

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{}", out);
    assert!(lines[0].starts_with("2015-01-01 add"));
    assert!(lines[0].contains(r"Globex | 1 Main St\n\n\n | US"));
    assert!(lines[1].starts_with("2015-01-02 delete"));
}

#[test]
fn show_reports_private_sentinel() {
    let temp = Project::imported();
    temp.oj()
        .args(&["show", "00000D"])
        .passes()
        .stdout_has("PRIVATE | PRIVATE | PRIVATE")
        .stdout_has("2015-01-02 change")
        .stdout_has("Initech | 4120 Freidrich Lane");
}

#[test]
fn show_unknown_key() {
    let temp = Project::configured("2015-01-01");
    temp.oj()
        .args(&["show", "AABBCC"])
        .passes()
        .stdout_eq("No records for AABBCC\n");
}

#[test]
fn show_json_uses_wire_names() {
    let temp = Project::imported();
    let out = temp
        .oj()
        .args(&["show", "00000C", "--json"])
        .passes()
        .stdout();

    let records: serde_json::Value = serde_json::from_str(&out).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["DeepMac"], "registry");
    assert_eq!(records[0]["OUI"], "00000C");
    assert_eq!(records[0]["OUISize"], 24);
    assert_eq!(records[0]["EventType"], "add");
    assert_eq!(records[0]["OrgName"], "Cisco Systems, Inc");
}

#[test]
fn show_accepts_journal_override() {
    let temp = Project::imported();
    let other = Project::empty();
    other
        .oj()
        .args(&[
            "--journal",
            temp.journal().to_str().unwrap(),
            "show",
            "00000F",
        ])
        .passes()
        .stdout_has("Hooli");
}
