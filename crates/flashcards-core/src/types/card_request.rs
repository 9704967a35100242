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

use crate::types::card_request_dto::CardRequestDto;
use crate::validation::Validate;
use crate::validation::ValidationErrors;

/// The internal, already-accepted form of a card create/update request.
///
/// Carries no identity: it describes what a card should contain, not which
/// card it is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequest {
    pub question: String,
    pub answer: String,
}

impl CardRequest {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl TryFrom<CardRequestDto> for CardRequest {
    type Error = ValidationErrors;

    fn try_from(dto: CardRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        let CardRequestDto { question, answer } = dto;
        Ok(CardRequest { question, answer })
    }
}
