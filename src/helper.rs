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

use std::time::Duration;

use portpicker::pick_unused_port;
use tokio::net::TcpStream;
use tokio::spawn;
use tokio::time::sleep;

use crate::cmd::serve::server::start_server;
use crate::config::ServerConfig;
use crate::db::IN_MEMORY;
use crate::error::Fallible;

pub const TEST_HOST: &str = "127.0.0.1";

pub async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            break;
        }
        sleep(Duration::from_millis(1)).await;
    }
    Ok(())
}

/// Start a server backed by an in-memory database on a free port and return
/// its base URL once it accepts connections.
pub async fn spawn_test_server() -> Fallible<String> {
    let port = pick_unused_port().expect("no free port");
    let config = ServerConfig {
        host: TEST_HOST.to_string(),
        port,
        database: IN_MEMORY.to_string(),
    };
    spawn(async move { start_server(config).await });
    wait_for_server(TEST_HOST, port).await?;
    Ok(format!("http://{TEST_HOST}:{port}"))
}
