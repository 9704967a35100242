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

//! flashcards-core: the request, validation, and error contract of the
//! flashcards service.
//!
//! - Card and folder request DTOs and their validation rules
//! - The internal [`CardRequest`] form handed to the service layer
//! - [`DomainError`] for card- and folder-domain failures
//! - Stored card/folder shapes and pagination

pub mod error;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use error::{DomainError, ErrorDetail, ErrorReport, Fallible, fail};
pub use types::card::{Card, CardId};
pub use types::card_request::CardRequest;
pub use types::card_request_dto::CardRequestDto;
pub use types::folder::{Folder, FolderId, FolderRequestDto};
pub use types::page::{Page, PageRequest};
pub use types::timestamp::Timestamp;
pub use validation::{FieldError, Validate, ValidationErrors};
