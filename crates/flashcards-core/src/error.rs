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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::validation::ValidationErrors;

/// A boxed underlying failure carried by a [`DomainError`].
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// The payload of a domain error: an optional human-readable message and an
/// optional underlying cause. Either, both, or neither may be present.
#[derive(Debug, Default)]
pub struct ErrorDetail {
    message: Option<String>,
    cause: Option<Cause>,
}

impl ErrorDetail {
    /// A detail with neither message nor cause.
    pub fn new() -> Self {
        Self {
            message: None,
            cause: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    pub fn with_cause(cause: impl Into<Cause>) -> Self {
        Self {
            message: None,
            cause: Some(cause.into()),
        }
    }

    pub fn with_message_and_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    /// The message this detail was constructed with, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.message, &self.cause) {
            (Some(message), _) => write!(f, "{message}"),
            (None, Some(cause)) => write!(f, "{cause}"),
            (None, None) => Ok(()),
        }
    }
}

/// Failures raised by card-domain operations, as opposed to unexpected
/// plumbing errors (see [`ErrorReport`]).
#[derive(Debug)]
pub enum DomainError {
    /// A card operation (create, update, lookup, delete) failed.
    Card(ErrorDetail),
    /// A folder operation failed.
    Folder(ErrorDetail),
}

impl DomainError {
    pub fn card(detail: ErrorDetail) -> Self {
        DomainError::Card(detail)
    }

    pub fn folder(detail: ErrorDetail) -> Self {
        DomainError::Folder(detail)
    }

    pub fn detail(&self) -> &ErrorDetail {
        match self {
            DomainError::Card(detail) => detail,
            DomainError::Folder(detail) => detail,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.detail().message()
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.detail().cause()
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (kind, detail) = match self {
            DomainError::Card(detail) => ("card error", detail),
            DomainError::Folder(detail) => ("folder error", detail),
        };
        if detail.message.is_none() && detail.cause.is_none() {
            write!(f, "{kind}")
        } else {
            write!(f, "{kind}: {detail}")
        }
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.detail()
            .cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value:#?}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value:#?}"),
        }
    }
}

impl From<ValidationErrors> for ErrorReport {
    fn from(value: ValidationErrors) -> Self {
        ErrorReport {
            message: format!("Validation error: {value}"),
        }
    }
}

impl From<DomainError> for ErrorReport {
    fn from(value: DomainError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}
