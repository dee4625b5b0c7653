// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// First archived registry snapshot
pub const DAY_ONE: &str = "\
00-00-0C\t000000\tCisco Systems, Inc\t170 West Tasman Drive\tSan Jose CA 95134\t\t\t\tUS
00-00-0D\t000000\tPRIVATE
00-00-0E\t000000\tGlobex\t1 Main St\t\t\t\t\tUS
";

/// Second snapshot: Cisco unchanged, 00000D goes public, Globex drops out,
/// Hooli appears
pub const DAY_TWO: &str = "\
00-00-0C\t000000\tCISCO SYSTEMS, INC\t170 West Tasman Drive\tSan Jose CA 95134\t\t\t\tus
00-00-0D\t000000\tInitech\t4120 Freidrich Lane\tAustin TX\t\t\t\tUS
00-00-0F\t000000\tHooli\tPalo Alto\t\t\t\t\tUS
";

/// Temporary journal, archive and config file
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Nothing on disk, not even the journal directory
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Journal directory and a config starting at `last_date`
    pub fn configured(last_date: &str) -> Self {
        let project = Self::empty();
        std::fs::create_dir_all(project.journal()).unwrap();
        project.write_config(&format!("last_date = \"{}\"\n", last_date));
        project
    }

    /// Two archived days imported into the journal
    pub fn imported() -> Self {
        let project = Self::configured("2015-01-01");
        project.archive("2015-01-01", "oui.csv", DAY_ONE);
        project.archive("2015-01-02", "oui.csv", DAY_TWO);
        project
            .oj()
            .args(&["import", "--until", "2015-01-02"])
            .passes();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn journal(&self) -> PathBuf {
        self.path().join("journal")
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.path().join("archive")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("import.toml")
    }

    /// Write the config with journal and archive paths plus `extra` lines
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "journal_dir = \"{}\"\narchive_dir = \"{}\"\n{}",
            self.journal().display(),
            self.archive_dir().display(),
            extra
        );
        self.file("import.toml", &content);
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).unwrap()
    }

    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Archive a registry file for `date` (YYYY-MM-DD)
    pub fn archive(&self, date: &str, file: &str, content: &str) {
        let day = date.replace('-', "/");
        self.file(&format!("archive/{}/{}", day, file), content);
    }

    /// The `oj` binary, pointed at this project's config
    pub fn oj(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("oj").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout: {}",
            run.stdout()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(
            predicate::str::contains(needle).eval(&out),
            "stdout lacks {:?}:\n{}",
            needle,
            out
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(
            !predicate::str::contains(needle).eval(&out),
            "stdout has {:?}:\n{}",
            needle,
            out
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let err = self.stderr();
        assert!(
            predicate::str::contains(needle).eval(&err),
            "stderr lacks {:?}:\n{}",
            needle,
            err
        );
        self
    }
}
