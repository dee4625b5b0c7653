// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::{bail, Result};
use oj_core::Oui;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Keys to validate
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Print the canonical form of each key; fails if any is invalid
pub fn check(args: CheckArgs) -> Result<()> {
    let mut invalid = 0;
    for raw in &args.keys {
        match Oui::parse(raw) {
            Ok(oui) => println!("{} ({}-bit)", oui, oui.size()),
            Err(e) => {
                eprintln!("{}", e);
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        bail!("{} invalid key(s)", invalid);
    }
    Ok(())
}
