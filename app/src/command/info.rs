use flashgen_config::Config;
use flashgen_core::util::mask_secret;

/// Strategy for displaying the effective configuration.
///
/// Shows the merged result of the config file and environment overrides. The API key
/// is only ever printed masked.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== flashgen Configuration ===\n");
        println!("Config file: {}\n", Config::config_path()?.display());

        println!("Provider:");
        let key = config
            .provider
            .api_key()
            .map_or_else(|| "(not set)".to_string(), mask_secret);
        println!("  API Key: {key}");
        println!("  Model: {}", config.provider.model);
        println!("  Base URL: {}", config.provider.base_url);
        println!("  Timeout: {}s", config.provider.timeout_secs);
        println!("  Retry Delays (ms): {:?}", config.provider.retry_delays_ms);
        println!();

        println!("Generation:");
        println!("  Temperature: {}", config.generation.temperature);
        println!("  Max Tokens: {}", config.generation.max_tokens);
        println!();

        println!("Server:");
        println!("  Bind: {}:{}", config.server.host, config.server.port);
        println!(
            "  Allowed Origins: {}",
            config.server.allowed_origins.join(", ")
        );

        Ok(())
    }
}
