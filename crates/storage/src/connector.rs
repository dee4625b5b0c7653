// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend selection and connection state

use crate::error::ConnectionError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Kind of storage behind a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Filesystem,
    Database,
    Web,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Filesystem => "filesystem",
            BackendKind::Database => "database",
            BackendKind::Web => "web",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filesystem" => Ok(BackendKind::Filesystem),
            "database" => Ok(BackendKind::Database),
            "web" => Ok(BackendKind::Web),
            _ => Err(ConnectionError::UnknownKind(s.to_string())),
        }
    }
}

/// Login for network backends
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where a repository lives and whether it is reachable
#[derive(Debug, Clone)]
pub struct Connector {
    kind: BackendKind,
    address: String,
    credentials: Option<Credentials>,
    root: Option<PathBuf>,
    connected: bool,
}

impl Connector {
    /// Validate a backend description without touching it
    pub fn new(
        kind: BackendKind,
        address: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Result<Self, ConnectionError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ConnectionError::EmptyAddress);
        }
        let complete = credentials.as_ref().is_some_and(Credentials::is_complete);
        if kind != BackendKind::Filesystem && !complete {
            return Err(ConnectionError::MissingCredentials(kind));
        }
        Ok(Self {
            kind,
            address,
            credentials,
            root: None,
            connected: false,
        })
    }

    /// Shorthand for a filesystem journal rooted at `dir`
    pub fn filesystem(dir: impl AsRef<Path>) -> Result<Self, ConnectionError> {
        Self::new(
            BackendKind::Filesystem,
            dir.as_ref().to_string_lossy().into_owned(),
            None,
        )
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Resolved journal directory, once a filesystem connector is connected
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn connect(&mut self) -> Result<(), ConnectionError> {
        match self.kind {
            BackendKind::Filesystem => {
                let root = resolve_dir(&self.address)?;
                if !root.is_dir() {
                    return Err(ConnectionError::MissingDirectory(root));
                }
                debug!(root = %root.display(), "connected to filesystem journal");
                self.root = Some(root);
                self.connected = true;
                Ok(())
            }
            kind => Err(ConnectionError::Unsupported(kind)),
        }
    }

    pub fn disconnect(&mut self) {
        if self.connected {
            debug!(kind = %self.kind, address = %self.address, "disconnected");
        }
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Expand a leading `~` and make the path absolute
fn resolve_dir(address: &str) -> Result<PathBuf, ConnectionError> {
    let path = match address.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = dirs::home_dir()
                .ok_or_else(|| ConnectionError::MissingDirectory(PathBuf::from(address)))?;
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(address),
    };
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
#[path = "connector_tests.rs"]
mod tests;
