use std::sync::Arc;

use flashgen_core::{CompletionProvider, FlashcardService};

/// Static metadata reported by `GET /`.
#[derive(Debug, Clone)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "AI Flashcard Generator API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub struct AppState<P>
where
    P: CompletionProvider,
{
    /// `None` when no provider credential is configured.
    pub service: Option<Arc<FlashcardService<P>>>,
    pub info: ApiInfo,
}

impl<P> AppState<P>
where
    P: CompletionProvider,
{
    pub fn new(service: Option<FlashcardService<P>>, info: ApiInfo) -> Self {
        Self {
            service: service.map(Arc::new),
            info,
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.service.is_some()
    }
}

impl<P> Clone for AppState<P>
where
    P: CompletionProvider,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            info: self.info.clone(),
        }
    }
}
