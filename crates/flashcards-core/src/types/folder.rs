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

use serde::Deserialize;
use serde::Serialize;

use crate::types::timestamp::Timestamp;
use crate::validation::Checker;
use crate::validation::FOLDER_NAME_BLANK_MESSAGE;
use crate::validation::Validate;
use crate::validation::ValidationErrors;
use crate::validation::null_as_empty;

pub type FolderId = i64;

/// A named group of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Wire form of a folder create request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderRequestDto {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
}

impl FolderRequestDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for FolderRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        checker.not_blank("name", &self.name, FOLDER_NAME_BLANK_MESSAGE);
        checker.finish()
    }
}
