// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use oj_storage::{Connector, Repository};

const DAY_ONE: &str = "\
00-00-0C\t000000\tCisco Systems, Inc\t170 West Tasman Drive\tSan Jose CA 95134\t\t\t\tUS
00-00-0D\t000000\tPRIVATE
00-00-0E\t000000\tGlobex\t1 Main St\t\t\t\t\tUS
";

const DAY_TWO: &str = "\
00-00-0C\t000000\tCISCO SYSTEMS, INC\t170 West Tasman Drive\tSan Jose CA 95134\t\t\t\tus
00-00-0D\t000000\tInitech\t4120 Freidrich Lane\tAustin TX\t\t\t\tUS

not a row
00-00-0F\t000000\tHooli\tPalo Alto\t\t\t\t\tUS
";

fn open() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::open(Connector::filesystem(dir.path()).unwrap()).unwrap();
    (dir, repo)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, d).unwrap()
}

fn run(importer: &BatchImporter<'_>, rows: &str, d: u32) -> BatchReport {
    importer
        .import_reader(RegistryFile::Oui24, rows.as_bytes(), day(d))
        .unwrap()
}

#[test]
fn first_batch_adds_everything() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");

    let report = run(&importer, DAY_ONE, 1);

    assert_eq!(report.rows, 3);
    assert_eq!(report.added, 3);
    assert_eq!(report.appended(), 3);
    assert!(report.swept.is_empty());
    assert_eq!(repo.is_private("00000D").unwrap(), Some(true));
    assert_eq!(repo.is_private("00000C").unwrap(), Some(false));
}

#[test]
fn second_batch_detects_changes_and_deletions() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    run(&importer, DAY_ONE, 1);

    let report = run(&importer, DAY_TWO, 2);

    assert_eq!(report.rows, 3);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.changed, 1);
    assert_eq!(report.added, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.swept, vec![Oui::parse("00000E").unwrap()]);

    assert_eq!(repo.is_private("00000D").unwrap(), Some(false));
    assert_eq!(repo.is_deleted("00000E").unwrap(), Some(true));
    let globex = repo.get("00000E").unwrap();
    assert_eq!(globex.last().unwrap().event_type(), EventType::Delete);
    assert_eq!(globex.last().unwrap().event_date(), day(2));
}

#[test]
fn reappearing_key_is_restored() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    run(&importer, DAY_ONE, 1);
    run(&importer, DAY_TWO, 2);

    let report = run(&importer, DAY_ONE, 3);

    assert_eq!(report.restored, 1);
    assert_eq!(repo.is_deleted("00000E").unwrap(), Some(false));
    // 00000F is now missing
    assert_eq!(report.swept, vec![Oui::parse("00000F").unwrap()]);
}

#[test]
fn rerunning_a_day_is_idempotent() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    run(&importer, DAY_ONE, 1);

    let report = run(&importer, DAY_ONE, 1);

    assert_eq!(report.appended(), 0);
    assert_eq!(report.unchanged, 3);
    assert_eq!(repo.get("00000C").unwrap().len(), 1);
}

#[test]
fn dry_run_reports_without_writing() {
    let (dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    run(&importer, DAY_ONE, 1);

    let dry = BatchImporter::new(Reconciler::new(&repo).dry_run(true), "IEEE");
    let report = run(&dry, DAY_TWO, 2);

    assert_eq!(report.changed, 1);
    assert_eq!(report.swept, vec![Oui::parse("00000E").unwrap()]);
    assert_eq!(repo.is_deleted("00000E").unwrap(), Some(false));
    assert!(!dir.path().join("00/00/0F").exists());
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    let rows = b"00-00-0C\t000000\tCaf\xe9 Corp\t1 Main St\t\t\t\t\tFR\n";

    let report = importer
        .import_reader(RegistryFile::Oui24, &rows[..], day(1))
        .unwrap();

    assert_eq!(report.added, 1);
    let journal = repo.get("00000C").unwrap();
    assert_eq!(
        journal[0].registry_entry().unwrap().org_name,
        "Caf\u{FFFD} Corp"
    );
}

#[test]
fn source_name_is_recorded() {
    let (_dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE mirror");
    run(&importer, DAY_ONE, 1);
    assert_eq!(repo.get("00000C").unwrap()[0].source(), "IEEE mirror");
}

#[test]
fn missing_file_is_open_error() {
    let (dir, repo) = open();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    let err = importer
        .import_file(RegistryFile::Oui24, &dir.path().join("oui.csv"), day(1))
        .unwrap_err();
    assert!(matches!(err, ImportError::Open { .. }));
}

#[test]
fn closed_repository_aborts_batch() {
    let (_dir, mut repo) = open();
    repo.close();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");
    let err = importer
        .import_reader(RegistryFile::Oui24, DAY_ONE.as_bytes(), day(1))
        .unwrap_err();
    assert!(matches!(err, ImportError::Store(_)));
}

#[test]
fn unchanged_row_matches_existing_journal_address_form() {
    let (_dir, repo) = open();
    // Trailing empty address lines are stored as literal separators
    let existing = oj_core::Record::registry(
        Oui::parse("00000C").unwrap(),
        "IEEE",
        EventType::Add,
        day(1),
        oj_core::RegistryEntry::public(
            "Cisco Systems, Inc",
            "170 West Tasman Drive\\nSan Jose CA 95134\\n\\n",
            "US",
        ),
    );
    repo.append(&existing).unwrap();
    let importer = BatchImporter::new(Reconciler::new(&repo), "IEEE");

    let report = run(
        &importer,
        "00-00-0C\t000000\tCisco Systems, Inc\t170 West Tasman Drive\tSan Jose CA 95134\t\t\t\tUS\n",
        2,
    );

    assert_eq!(report.unchanged, 1);
    assert_eq!(report.changed, 0);
    assert_eq!(repo.get("00000C").unwrap(), vec![existing]);
}
