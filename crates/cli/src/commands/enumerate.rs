// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::Context;
use anyhow::Result;
use oj_core::SizeFilter;
use oj_storage::EnumerateFilter;

#[derive(clap::Args, Debug)]
pub struct EnumerateArgs {
    /// Key size in bits: 24, 28, 36 or all
    #[arg(long, default_value = "all")]
    pub size: SizeFilter,

    /// Leave out keys flagged private
    #[arg(long)]
    pub no_private: bool,

    /// Include keys flagged deleted
    #[arg(long)]
    pub deleted: bool,
}

pub fn enumerate(args: EnumerateArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repository()?;
    let filter = EnumerateFilter::new(args.size)
        .include_private(!args.no_private)
        .include_deleted(args.deleted);

    let mut keys = repo.enumerate(filter)?;
    keys.sort();
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}
