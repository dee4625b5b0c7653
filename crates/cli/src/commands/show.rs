// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal display command

use crate::context::Context;
use anyhow::Result;
use oj_core::{sort_chronological, Oui, Record, RecordBody};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// OUI key (separators allowed, any case)
    pub oui: String,

    /// Order by event date instead of journal order
    #[arg(long)]
    pub sorted: bool,

    /// Print records in wire form
    #[arg(long)]
    pub json: bool,
}

pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let oui = Oui::parse(&args.oui)?;
    let repo = ctx.open_repository()?;
    let mut records = repo.get(oui.as_str())?;
    if args.sorted {
        sort_chronological(&mut records);
    }

    if args.json {
        let values = records
            .iter()
            .map(Record::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records for {}", oui);
        return Ok(());
    }
    for record in &records {
        println!("{}", line(record));
    }
    Ok(())
}

fn line(record: &Record) -> String {
    let body = match record.body() {
        RecordBody::Registry(entry) => format!(
            "{} | {} | {}",
            entry.org_name,
            entry.address().unwrap_or("-"),
            entry.country().unwrap_or("-")
        ),
        RecordBody::Metadata(entry) => format!(
            "{}-{} confidence {}{}",
            entry.mac_start,
            entry.mac_end,
            entry.confidence,
            entry
                .device_type
                .as_deref()
                .map(|t| format!(" ({})", t))
                .unwrap_or_default()
        ),
    };
    format!(
        "{} {:<6} {:<10} {}",
        record.event_date(),
        record.event_type(),
        record.source(),
        body
    )
}
