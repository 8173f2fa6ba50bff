use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};

// Sampling parameters are owned by the generator
use flashgen_core::GenerationConfig;

const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "ProviderConfig::default_model")]
    pub model: String,
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ProviderConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Pause before each retry of a transient failure, in milliseconds.
    #[serde(default = "ProviderConfig::default_retry_delays_ms")]
    pub retry_delays_ms: Vec<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Self::default_model(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            retry_delays_ms: Self::default_retry_delays_ms(),
        }
    }
}

impl ProviderConfig {
    fn default_model() -> String {
        "gpt-3.5-turbo".to_string()
    }

    fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    fn default_retry_delays_ms() -> Vec<u64> {
        vec![1000, 2000]
    }

    /// The API key, unless it is blank or still the template placeholder.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn retry_delays(&self) -> Vec<Duration> {
        self.retry_delays_ms
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "ServerConfig::default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            allowed_origins: Self::default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }

    fn default_allowed_origins() -> Vec<String> {
        vec![
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    }
}

impl Config {
    /// Load `~/flashgen/config.json` if present, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            info!("Loading config from {}", config_path.display());
            Self::load_from(&config_path)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Override file values with environment variables looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("OPENAI_API_KEY") {
            self.provider.api_key = Some(key);
        }
        if let Some(base_url) = var("OPENAI_BASE_URL") {
            self.provider.base_url = base_url;
        }
        if let Some(model) = var("FLASHGEN_MODEL") {
            self.provider.model = model;
        }
        if let Some(host) = var("FLASHGEN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("FLASHGEN_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("FLASHGEN_PORT is not a valid port: {port}"))?;
        }
        if let Some(origins) = var("FLASHGEN_ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        Ok(())
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("flashgen")
            .join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("flashgen");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("      (or set OPENAI_API_KEY in the environment or a .env file)");
        println!("   2. Run 'flashgen serve' to start the API");
        println!();
        println!("🔧 Configuration options:");
        println!("   - provider.model: completion model to use");
        println!("   - provider.timeout_secs / retry_delays_ms: request timeout and retry budget");
        println!("   - server.allowed_origins: origins permitted by CORS");
        println!();
        Ok(())
    }

    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        let config_template = r#"{
  "provider": {
    "api_key": "your-openai-api-key-here",
    "model": "gpt-3.5-turbo",
    "base_url": "https://api.openai.com/v1",
    "timeout_secs": 30,
    "retry_delays_ms": [1000, 2000]
  },
  "generation": {
    "temperature": 0.7,
    "max_tokens": 1500
  },
  "server": {
    "host": "0.0.0.0",
    "port": 8000,
    "allowed_origins": ["http://localhost:5173", "http://127.0.0.1:5173"]
  }
}"#;

        std::fs::write(path, config_template)?;
        Ok(())
    }
}
