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

//! Explicit request validation.
//!
//! DTOs declare their constraints by implementing [`Validate`]. Every
//! violated constraint is collected, in field declaration order, so a client
//! sees all problems with a submission at once.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

pub const QUESTION_BLANK_MESSAGE: &str = "❌question can't be blanked!";
pub const ANSWER_BLANK_MESSAGE: &str = "❌answer can't be blanked!";
pub const FOLDER_NAME_BLANK_MESSAGE: &str = "❌name can't be blanked!";

/// A single violated constraint on a named field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A non-empty list of field errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message of the first violated constraint.
    pub fn first_message(&self) -> &str {
        // Never empty: only `Checker::finish` constructs this type.
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or_default()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for ValidationErrors {}

/// Types that declare constraints on their own fields.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Accumulates field errors while a value is being checked.
#[derive(Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Reject `value` if it is blank.
    pub fn not_blank(&mut self, field: &'static str, value: &str, message: &str) -> &mut Self {
        if is_blank(value) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

/// True if the string is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Deserialize a string field, reading `null` as the empty string so that it
/// is rejected by the not-blank check instead of failing to parse.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
