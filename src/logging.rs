// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Diagnostic logging.
//!
//! Standard output belongs to the terminal UI, so log records are written to
//! a file alongside the configuration file instead.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config;

const LOG_FILE: &str = "filedeck.log";
const LOG_ENV: &str = "FILEDECK_LOG";

/// Installs the global `tracing` subscriber.
///
/// The filter is read from the `FILEDECK_LOG` environment variable and
/// defaults to `info`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// has already been installed.
pub(crate) fn init() -> Result<PathBuf> {
    let dir = config::config_dir().unwrap_or_else(std::env::temp_dir);
    fs::create_dir_all(&dir).context("Failed to create log directory")?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to install log subscriber")?;

    Ok(path)
}
