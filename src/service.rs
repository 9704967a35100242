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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use flashcards_core::Card;
use flashcards_core::CardId;
use flashcards_core::CardRequest;
use flashcards_core::DomainError;
use flashcards_core::ErrorDetail;
use flashcards_core::Folder;
use flashcards_core::FolderId;
use flashcards_core::Page;
use flashcards_core::PageRequest;
use flashcards_core::Timestamp;

use crate::db::Database;

type Kind = fn(ErrorDetail) -> DomainError;

/// Card and folder operations. Inputs are assumed to be validated already;
/// every failure is reported as a [`DomainError`].
#[derive(Clone)]
pub struct CardService {
    db: Arc<Mutex<Database>>,
}

impl CardService {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn create_folder(&self, name: &str) -> Result<Folder, DomainError> {
        let db = self.lock(DomainError::folder)?;
        let folder = db
            .insert_folder(name, Timestamp::now())
            .map_err(storage(DomainError::folder, "Failed to save folder"))?;
        log::debug!("Created folder {}", folder.id);
        Ok(folder)
    }

    pub fn list_folders(&self) -> Result<Vec<Folder>, DomainError> {
        let db = self.lock(DomainError::folder)?;
        db.folders()
            .map_err(storage(DomainError::folder, "Failed to load folders"))
    }

    /// Delete a folder together with all of its cards.
    pub fn delete_folder(&self, folder_id: FolderId) -> Result<(), DomainError> {
        let db = self.lock(DomainError::folder)?;
        let deleted = db
            .delete_folder(folder_id)
            .map_err(storage(DomainError::folder, "Failed to delete folder"))?;
        if !deleted {
            return Err(folder_not_found(folder_id));
        }
        log::debug!("Deleted folder {folder_id}");
        Ok(())
    }

    pub fn create_card(
        &self,
        folder_id: FolderId,
        request: CardRequest,
    ) -> Result<Card, DomainError> {
        let db = self.lock(DomainError::card)?;
        require_folder(&db, folder_id)?;
        let card = db
            .insert_card(folder_id, &request, Timestamp::now())
            .map_err(storage(DomainError::card, "Failed to save card"))?;
        log::debug!("Created card {} in folder {folder_id}", card.id);
        Ok(card)
    }

    pub fn update_card(
        &self,
        folder_id: FolderId,
        card_id: CardId,
        request: CardRequest,
    ) -> Result<Card, DomainError> {
        let db = self.lock(DomainError::card)?;
        let card = db
            .update_card(folder_id, card_id, &request, Timestamp::now())
            .map_err(storage(DomainError::card, "Failed to update card"))?
            .ok_or_else(|| card_not_found(folder_id, card_id))?;
        log::debug!("Updated card {card_id} in folder {folder_id}");
        Ok(card)
    }

    pub fn get_card(&self, folder_id: FolderId, card_id: CardId) -> Result<Card, DomainError> {
        let db = self.lock(DomainError::card)?;
        db.get_card(folder_id, card_id)
            .map_err(storage(DomainError::card, "Failed to load card"))?
            .ok_or_else(|| card_not_found(folder_id, card_id))
    }

    pub fn list_cards(
        &self,
        folder_id: FolderId,
        page: PageRequest,
    ) -> Result<Page<Card>, DomainError> {
        let page = page.normalized();
        let db = self.lock(DomainError::card)?;
        require_folder(&db, folder_id)?;
        let total = db
            .count_cards(folder_id)
            .map_err(storage(DomainError::card, "Failed to count cards"))?;
        let cards = db
            .cards_in_folder(folder_id, page)
            .map_err(storage(DomainError::card, "Failed to load cards"))?;
        Ok(Page::new(cards, page, total))
    }

    pub fn delete_card(&self, folder_id: FolderId, card_id: CardId) -> Result<(), DomainError> {
        let db = self.lock(DomainError::card)?;
        let deleted = db
            .delete_card(folder_id, card_id)
            .map_err(storage(DomainError::card, "Failed to delete card"))?;
        if !deleted {
            return Err(card_not_found(folder_id, card_id));
        }
        log::debug!("Deleted card {card_id} in folder {folder_id}");
        Ok(())
    }

    fn lock(&self, kind: Kind) -> Result<MutexGuard<'_, Database>, DomainError> {
        self.db.lock().map_err(|_| {
            log::error!("Database mutex poisoned");
            kind(ErrorDetail::with_message_and_cause(
                "Database unavailable",
                "mutex poisoned",
            ))
        })
    }
}

fn require_folder(db: &Database, folder_id: FolderId) -> Result<Folder, DomainError> {
    db.get_folder(folder_id)
        .map_err(storage(DomainError::folder, "Failed to load folder"))?
        .ok_or_else(|| folder_not_found(folder_id))
}

/// Wrap a storage error as a domain error of the given kind.
fn storage(kind: Kind, message: &'static str) -> impl FnOnce(rusqlite::Error) -> DomainError {
    move |err| {
        log::error!("{message}: {err}");
        kind(ErrorDetail::with_message_and_cause(message, err))
    }
}

fn folder_not_found(folder_id: FolderId) -> DomainError {
    DomainError::folder(ErrorDetail::with_message(format!(
        "Folder with id {folder_id} not found"
    )))
}

fn card_not_found(folder_id: FolderId, card_id: CardId) -> DomainError {
    DomainError::card(ErrorDetail::with_message(format!(
        "Card with id {card_id} not found in folder {folder_id}"
    )))
}
