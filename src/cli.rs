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

use clap::Parser;

use crate::cmd::serve::server::start_server;
use crate::config::FileConfig;
use crate::config::Overrides;
use crate::config::ServerConfig;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the flashcards HTTP API.
    Serve {
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8080.
        #[arg(long)]
        port: Option<u16>,
        /// Path to the SQLite database, or `:memory:`. Default is flashcards.db.
        #[arg(long)]
        database: Option<String>,
        /// Path to a TOML config file. By default, flashcards.toml in the
        /// current directory is used if it exists.
        #[arg(long)]
        config: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            host,
            port,
            database,
            config,
        } => {
            let file = FileConfig::load(config.as_deref()).await?;
            let overrides = Overrides {
                host,
                port,
                database,
            };
            start_server(ServerConfig::resolve(overrides, file)).await
        }
    }
}
