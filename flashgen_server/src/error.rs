use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use flashgen_core::FlashcardError;
use thiserror::Error;

use crate::types::ErrorResponse;

/// Detail returned for every generation failure; provider text never reaches clients.
pub const GENERATION_FAILED_DETAIL: &str = "Failed to generate flashcards. Please try again.";
pub const MISSING_API_KEY_DETAIL: &str = "OpenAI API key not configured.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Flashcard(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Flashcard(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message for the response body.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::BadRequest(detail) => detail.clone(),
            Self::NotFound => "Not Found".to_string(),
            Self::Flashcard(FlashcardError::InvalidInput(reason)) => reason.to_string(),
            Self::Flashcard(FlashcardError::Configuration(_)) => MISSING_API_KEY_DETAIL.to_string(),
            Self::Flashcard(
                FlashcardError::GenerationFormat(_)
                | FlashcardError::NoValidCards
                | FlashcardError::GenerationFailed(_),
            ) => GENERATION_FAILED_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashgen_core::{InvalidInput, ProviderError};

    #[test]
    fn invalid_input_is_bad_request_with_reason() {
        let err = ApiError::from(FlashcardError::from(InvalidInput::TooLong { actual: 10_001 }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Text input too long (max 10,000 characters)");
    }

    #[test]
    fn provider_details_are_hidden() {
        let err = ApiError::from(FlashcardError::GenerationFailed(ProviderError::Status {
            status: 401,
            body: "Incorrect API key provided: sk-secret".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), GENERATION_FAILED_DETAIL);
    }

    #[test]
    fn configuration_error_is_server_error() {
        let err = ApiError::from(FlashcardError::Configuration("missing".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), MISSING_API_KEY_DETAIL);
    }
}
