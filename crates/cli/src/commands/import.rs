// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Archive import command

use crate::context::Context;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use oj_core::SystemClock;
use oj_engine::{Archive, BatchImporter, BatchReport, Reconciler};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// First archive day to import [default: last_date from the config]
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last archive day to import [default: today]
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Classify rows and report without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn import(args: ImportArgs, ctx: Context) -> Result<()> {
    let mut config = ctx.require_config()?.clone();
    let archive_dir = config
        .archive_dir
        .clone()
        .ok_or_else(|| anyhow!("archive_dir is not set in {}", ctx.config_path.display()))?;
    let from = args
        .from
        .or(config.last_date)
        .ok_or_else(|| anyhow!("no start date: set last_date or pass --from"))?;

    let repo = ctx.open_repository()?;
    let _lock = repo.lock_writer()?;

    let reconciler = Reconciler::new(&repo).dry_run(args.dry_run);
    let importer = BatchImporter::new(reconciler, config.source.clone());
    let archive = Archive::new(archive_dir);

    let report = match args.until {
        Some(until) => archive.import_range(&importer, from, until)?,
        None => archive.catch_up(&importer, from, &SystemClock)?,
    };

    if report.days.is_empty() {
        println!("Nothing archived since {}", from);
    }
    for day in &report.days {
        for batch in &day.batches {
            println!("{}", summary(batch));
        }
    }

    if args.dry_run {
        println!("Dry run: journal and config left unchanged");
        return Ok(());
    }
    config.last_date = Some(report.next);
    config.save(&ctx.config_path)?;
    tracing::info!(next = %report.next, "import position saved");
    Ok(())
}

fn summary(batch: &BatchReport) -> String {
    format!(
        "{} {:<12} {} rows: {} added, {} changed, {} restored, {} unchanged, {} skipped, {} deleted",
        batch.date,
        batch.file,
        batch.rows,
        batch.added,
        batch.changed,
        batch.restored,
        batch.unchanged,
        batch.skipped,
        batch.swept.len()
    )
}
