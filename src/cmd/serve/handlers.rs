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
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use flashcards_core::Card;
use flashcards_core::CardId;
use flashcards_core::CardRequest;
use flashcards_core::CardRequestDto;
use flashcards_core::Folder;
use flashcards_core::FolderId;
use flashcards_core::FolderRequestDto;
use flashcards_core::Page;
use flashcards_core::PageRequest;
use flashcards_core::Validate;

use crate::cmd::serve::response::ApiError;
use crate::service::CardService;

pub async fn list_folders(
    State(service): State<CardService>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    Ok(Json(service.list_folders()?))
}

pub async fn create_folder(
    State(service): State<CardService>,
    Json(dto): Json<FolderRequestDto>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    dto.validate()?;
    let folder = service.create_folder(&dto.name)?;
    Ok((StatusCode::CREATED, Json(folder)))
}

pub async fn delete_folder(
    State(service): State<CardService>,
    Path(folder_id): Path<FolderId>,
) -> Result<StatusCode, ApiError> {
    service.delete_folder(folder_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_cards(
    State(service): State<CardService>,
    Path(folder_id): Path<FolderId>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<Card>>, ApiError> {
    Ok(Json(service.list_cards(folder_id, page)?))
}

pub async fn create_card(
    State(service): State<CardService>,
    Path(folder_id): Path<FolderId>,
    Json(dto): Json<CardRequestDto>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let request: CardRequest = dto.into_request()?;
    let card = service.create_card(folder_id, request)?;
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn get_card(
    State(service): State<CardService>,
    Path((folder_id, card_id)): Path<(FolderId, CardId)>,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(service.get_card(folder_id, card_id)?))
}

pub async fn update_card(
    State(service): State<CardService>,
    Path((folder_id, card_id)): Path<(FolderId, CardId)>,
    Json(dto): Json<CardRequestDto>,
) -> Result<Json<Card>, ApiError> {
    let request: CardRequest = dto.into_request()?;
    Ok(Json(service.update_card(folder_id, card_id, request)?))
}

pub async fn delete_card(
    State(service): State<CardService>,
    Path((folder_id, card_id)): Path<(FolderId, CardId)>,
) -> Result<StatusCode, ApiError> {
    service.delete_card(folder_id, card_id)?;
    Ok(StatusCode::NO_CONTENT)
}
