// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::Context;
use anyhow::Result;
use oj_core::Oui;
use oj_storage::Flag;

#[derive(clap::Args, Debug)]
pub struct FlagsArgs {
    /// OUI key
    pub oui: String,
}

pub fn flags(args: FlagsArgs, ctx: &Context) -> Result<()> {
    let oui = Oui::parse(&args.oui)?;
    let repo = ctx.open_repository()?;
    for flag in [Flag::Private, Flag::Deleted] {
        let state = match repo.flag(oui.as_str(), flag)? {
            Some(true) => "true",
            Some(false) => "false",
            None => "unknown",
        };
        println!("{}: {}", flag, state);
    }
    Ok(())
}
