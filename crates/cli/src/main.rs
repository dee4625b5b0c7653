// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oj - OUI journal CLI

mod commands;
mod completions;
mod config;
mod context;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, enumerate, flags, import, migrate, show};
use context::Context;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oj",
    version,
    about = "OUI journal - track IEEE registry changes over time"
)]
struct Cli {
    /// Import configuration file [default: <config dir>/oj/import.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Journal directory, overriding the configuration
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import archived registry files into the journal
    Import(import::ImportArgs),
    /// Annotate journaled keys from a DeepMac database export
    Migrate(migrate::MigrateArgs),
    /// Print a key's journal
    Show(show::ShowArgs),
    /// List keys in the journal
    Enumerate(enumerate::EnumerateArgs),
    /// Print a key's private and deleted flags
    Flags(flags::FlagsArgs),
    /// Validate and normalize a key
    Check(check::CheckArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
        Commands::Check(args) => check::check(args),
        command => {
            let ctx = Context::load(cli.config, cli.journal)?;
            let _log_guard = logging::init(ctx.log_file())?;
            match command {
                Commands::Import(args) => import::import(args, ctx),
                Commands::Migrate(args) => migrate::migrate(args, ctx),
                Commands::Show(args) => show::show(args, &ctx),
                Commands::Enumerate(args) => enumerate::enumerate(args, &ctx),
                Commands::Flags(args) => flags::flags(args, &ctx),
                Commands::Check(_) | Commands::Completions(_) => Ok(()),
            }
        }
    }
}
