//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched statically
//! from `main`.

use flashgen_config::Config;
use flashgen_core::FlashcardService;
use flashgen_providers::OpenAiProvider;
use tracing::{info, warn};

mod generate;
mod info;
mod init;
mod serve;
mod version;

pub use generate::{GenerateInput, GenerateStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Build the generation service from config.
///
/// Returns `None` when no API key is configured; callers decide whether that is fatal.
fn build_service(config: &Config) -> anyhow::Result<Option<FlashcardService<OpenAiProvider>>> {
    let Some(api_key) = config.provider.api_key() else {
        warn!("OpenAI API key not configured");
        return Ok(None);
    };

    let provider = OpenAiProvider::new(
        api_key.to_string(),
        config.provider.model.clone(),
        config.provider.timeout(),
    )?
    .with_base_url(config.provider.base_url.clone())
    .with_retry_delays(config.provider.retry_delays());

    info!(
        "Generation settings: model={}, temperature={}, max_tokens={}",
        provider.model(),
        config.generation.temperature,
        config.generation.max_tokens
    );

    Ok(Some(FlashcardService::new(
        provider,
        config.generation.clone(),
    )))
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
