use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use flashgen_core::{CompletionProvider, FlashcardError};
use tracing::{error, info, warn};

use crate::error::{ApiError, MISSING_API_KEY_DETAIL};
use crate::state::AppState;
use crate::types::{FlashcardResponse, GenerateRequest, HealthResponse, RootResponse};

pub async fn root_handler<P>(State(state): State<AppState<P>>) -> Json<RootResponse>
where
    P: CompletionProvider + 'static,
{
    Json(RootResponse {
        message: state.info.title.clone(),
        version: state.info.version.clone(),
    })
}

pub async fn health_handler<P>(State(state): State<AppState<P>>) -> Json<HealthResponse>
where
    P: CompletionProvider + 'static,
{
    let configured = state.is_configured();
    Json(HealthResponse {
        status: if configured { "healthy" } else { "unhealthy" },
        openai_configured: configured,
    })
}

#[tracing::instrument(skip_all)]
pub async fn generate_flashcards_handler<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<FlashcardResponse>, ApiError>
where
    P: CompletionProvider + 'static,
{
    let Some(service) = state.service.as_ref() else {
        error!("OpenAI API key not configured");
        return Err(FlashcardError::Configuration(MISSING_API_KEY_DETAIL.to_string()).into());
    };

    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let set = service.generate_flashcards(&request.text).await?;

    info!("Returning {} flashcards", set.len());
    Ok(Json(FlashcardResponse::from(set)))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
