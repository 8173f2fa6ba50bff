use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use flashgen_config::Config;
use flashgen_server::{ApiInfo, AppState, create_router};
use tracing::info;

use super::build_service;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    /// Bind address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
}

/// Strategy for running the HTTP API.
///
/// A missing API key does not stop the server: `/health` reports it and generation
/// requests fail with a configuration error.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let host = input.host.unwrap_or_else(|| config.server.host.clone());
        let port = input.port.unwrap_or(config.server.port);
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("Invalid bind address: {host}"))?;
        let addr = SocketAddr::new(ip, port);

        let service = build_service(&config)?;
        info!(
            "Allowed origins: {}",
            config.server.allowed_origins.join(", ")
        );

        let state = AppState::new(service, ApiInfo::default());
        let router = create_router(state, &config.server.allowed_origins);

        flashgen_server::serve(router, addr).await?;
        Ok(())
    }
}
