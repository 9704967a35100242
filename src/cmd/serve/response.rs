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
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use flashcards_core::DomainError;
use flashcards_core::FieldError;
use flashcards_core::ValidationErrors;
use serde::Serialize;

/// The JSON body of every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            errors: Vec::new(),
        }
    }
}

/// Failures a handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was rejected at ingress.
    Validation(ValidationErrors),
    /// A card or folder operation failed.
    Domain(DomainError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            // A domain error without a cause reports a missing resource; one
            // with a cause wraps a storage failure.
            ApiError::Domain(err) => match err.cause() {
                None => StatusCode::NOT_FOUND,
                Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        ApiError::Validation(value)
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        ApiError::Domain(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(errors) => {
                log::debug!("Rejected request: {errors}");
                ErrorBody {
                    message: errors.first_message().to_string(),
                    status: status.as_u16(),
                    errors: errors.errors().to_vec(),
                }
            }
            ApiError::Domain(err) => {
                if status.is_server_error() {
                    log::error!("{err}");
                } else {
                    log::debug!("{err}");
                }
                let message = err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                ErrorBody::new(status, message)
            }
        };
        (status, Json(body)).into_response()
    }
}
