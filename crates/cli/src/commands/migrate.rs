// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DeepMac export migration command

use crate::context::Context;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use oj_core::{Clock, SystemClock};
use oj_engine::{Migrator, DEFAULT_MIGRATION_CONFIDENCE};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct MigrateArgs {
    /// Tab-separated DeepMac database export
    pub export: PathBuf,

    /// Event date for the migrated records [default: today]
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Confidence (1-5) given to every migrated annotation
    #[arg(long, default_value_t = DEFAULT_MIGRATION_CONFIDENCE)]
    pub confidence: u8,

    /// Count what would be migrated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn migrate(args: MigrateArgs, ctx: Context) -> Result<()> {
    if !(1..=5).contains(&args.confidence) {
        bail!("confidence must be between 1 and 5, got {}", args.confidence);
    }
    let date = args.date.unwrap_or_else(|| SystemClock.today());

    let repo = ctx.open_repository()?;
    let _lock = repo.lock_writer()?;

    let report = Migrator::new(&repo)
        .confidence(args.confidence)
        .dry_run(args.dry_run)
        .migrate_file(&args.export, date)?;

    println!(
        "{} rows: {} annotated, {} already present, {} without journal, {} skipped",
        report.rows, report.appended, report.present, report.unknown, report.skipped
    );
    if args.dry_run {
        println!("Dry run: journal left unchanged");
    }
    Ok(())
}
