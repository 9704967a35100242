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

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::delete;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::handlers::create_card;
use crate::cmd::serve::handlers::create_folder;
use crate::cmd::serve::handlers::delete_card;
use crate::cmd::serve::handlers::delete_folder;
use crate::cmd::serve::handlers::get_card;
use crate::cmd::serve::handlers::list_cards;
use crate::cmd::serve::handlers::list_folders;
use crate::cmd::serve::handlers::update_card;
use crate::cmd::serve::response::ErrorBody;
use crate::config::ServerConfig;
use crate::db::Database;
use crate::error::Context;
use crate::error::Fallible;
use crate::service::CardService;

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let db = Database::open(&config.database).context("failed to open database")?;
    let service = CardService::new(db);
    let app = router(service);
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C.
    let listener = TcpListener::bind(&bind).await?;
    log::info!("Listening on http://{bind}/");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn router(service: CardService) -> Router {
    let app = Router::new();
    let app = app.route("/api/folders", get(list_folders).post(create_folder));
    let app = app.route("/api/folders/{folder_id}", delete(delete_folder));
    let app = app.route(
        "/api/folders/{folder_id}/cards",
        get(list_cards).post(create_card),
    );
    let app = app.route(
        "/api/folders/{folder_id}/cards/{card_id}",
        get(get_card).put(update_card).delete(delete_card),
    );
    let app = app.fallback(not_found_handler);
    app.with_state(service)
}

async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(StatusCode::NOT_FOUND, "Not Found")),
    )
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            log::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await
        }
    }
}
