// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved configuration shared by the journal commands

use crate::config::Config;
use anyhow::{anyhow, Context as _, Result};
use oj_storage::{Connector, Repository};
use std::path::{Path, PathBuf};

pub struct Context {
    pub config_path: PathBuf,
    pub config: Option<Config>,
    journal: Option<PathBuf>,
}

impl Context {
    pub fn load(config_path: Option<PathBuf>, journal: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.map_or_else(Config::default_path, Ok)?;
        let config = Config::load_if_exists(&config_path)?;
        Ok(Self {
            config_path,
            config,
            journal,
        })
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.config.as_ref()?.log_file.as_deref()
    }

    pub fn require_config(&self) -> Result<&Config> {
        self.config
            .as_ref()
            .ok_or_else(|| anyhow!("no configuration at {}", self.config_path.display()))
    }

    pub fn journal_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.journal {
            return Ok(dir.clone());
        }
        match &self.config {
            Some(config) => Ok(config.journal_dir.clone()),
            None => Err(anyhow!(
                "no journal directory: pass --journal or create {}",
                self.config_path.display()
            )),
        }
    }

    pub fn open_repository(&self) -> Result<Repository> {
        let dir = self.journal_dir()?;
        let connector = Connector::filesystem(&dir)?;
        Repository::open(connector)
            .with_context(|| format!("cannot open journal at {}", dir.display()))
    }
}
