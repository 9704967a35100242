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

use crate::types::card_request::CardRequest;
use crate::validation::ANSWER_BLANK_MESSAGE;
use crate::validation::Checker;
use crate::validation::QUESTION_BLANK_MESSAGE;
use crate::validation::Validate;
use crate::validation::ValidationErrors;
use crate::validation::null_as_empty;

/// Wire form of a card create/update request.
///
/// Missing and `null` fields deserialize as empty strings so that they are
/// reported by [`Validate`] with the same message as blank ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRequestDto {
    #[serde(deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub answer: String,
}

impl CardRequestDto {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Validate and convert into the internal form. Field values are passed
    /// through untouched.
    pub fn into_request(self) -> Result<CardRequest, ValidationErrors> {
        CardRequest::try_from(self)
    }
}

impl Validate for CardRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        checker
            .not_blank("question", &self.question, QUESTION_BLANK_MESSAGE)
            .not_blank("answer", &self.answer, ANSWER_BLANK_MESSAGE);
        checker.finish()
    }
}
