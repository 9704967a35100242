// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Context;
use crate::error::Fallible;
use crate::error::fail;

/// The config file looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "flashcards.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "flashcards.db";

/// Settings read from a TOML config file. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Fallible<Self> {
        toml::from_str(text).context("invalid config file")
    }

    /// Load an explicitly named config file, or the default one if it exists.
    pub async fn load(path: Option<&str>) -> Fallible<Self> {
        let (path, required) = match path {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !path.exists() {
            if required {
                return fail(format!("config file {} does not exist.", path.display()));
            }
            return Ok(Self::default());
        }
        Self::load_from(&path).await
    }

    async fn load_from(path: &Path) -> Fallible<Self> {
        log::debug!("Reading config from {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        Self::parse(&text)
    }
}

/// Settings given on the command line. These override the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path to the SQLite database, or `:memory:`.
    pub database: String,
}

impl ServerConfig {
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Self {
        Self {
            host: overrides
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database: overrides
                .database
                .or(file.database)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        }
    }
}
