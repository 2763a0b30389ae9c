//! HTTP surface of the FAQ catalog.
//!
//! Mounts the [`faq_api`] router under `/api` and wraps it in the request
//! logging layer. The binary in `main.rs` adds configuration, the listener and
//! shutdown handling.

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
  Router,
  body::Body,
  http::{Request, Response},
};
use faq_core::store::CatalogStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::Span;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered under
/// `FAQ_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Lowers the default log level to DEBUG, which also logs every store
  /// operation.
  #[serde(default)]
  pub debug:      bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8000 }

fn default_store_path() -> PathBuf { PathBuf::from("faq.db") }

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router: the JSON API under `/api`, with every
/// request and response logged.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: CatalogStore + 'static,
{
  Router::new()
    .nest("/api", faq_api::api_router(store))
    .layer(
      TraceLayer::new_for_http()
        .on_request(log_request::<Body>)
        .on_response(log_response::<Body>),
    )
}

fn log_request<B>(req: &Request<B>, _span: &Span) {
  tracing::info!(method = %req.method(), uri = %req.uri(), "received request");
}

fn log_response<B>(res: &Response<B>, latency: Duration, _span: &Span) {
  tracing::info!(
    status = res.status().as_u16(),
    latency_ms = latency.as_millis() as u64,
    "completed response"
  );
}

// ─── Integration tests ────────────────────────────────────────────────────────
