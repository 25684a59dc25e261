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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{num::NonZeroUsize, path::PathBuf};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "filedeck";

const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(8).unwrap();
const DEFAULT_DASHBOARD_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub user_name: String,
    pub page_size: NonZeroUsize,
    pub dashboard_page_size: NonZeroUsize,
    pub seed_file: Option<String>,
    pub upload_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            user_name: "John Doe".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            dashboard_page_size: DEFAULT_DASHBOARD_PAGE_SIZE,
            seed_file: None,
            upload_delay_ms: 400,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|p| p.to_path_buf()))
}
