#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP surface for flashcard generation.
//!
//! Routes:
//! - `GET /` API name and version
//! - `GET /health` whether a provider credential is configured
//! - `POST /generate-flashcards` `{"text": ...}` to `{"flashcards": [...], "total_count": n}`
//!
//! Each route is also reachable under `/api`.

mod error;
mod handlers;
mod request_id;
mod router;
mod state;
mod types;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use error::{ApiError, GENERATION_FAILED_DETAIL, MISSING_API_KEY_DETAIL};
pub use request_id::{REQUEST_ID_HEADER, RequestId};
pub use router::{cors_layer, create_router};
pub use state::{ApiInfo, AppState};
pub use types::{ErrorResponse, FlashcardResponse, GenerateRequest, HealthResponse};

/// Serve `router` on `addr` until Ctrl-C.
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
