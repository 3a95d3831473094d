//! # dynaform - schema-driven HTML forms
//!
//! Serves a Leptos Web UI (the `ui/` crate) that renders forms from
//! declarative field lists, together with the registry of form definitions
//! the UI reads them from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dynaform::adapters::form_handler::FormRegistry;
//! use dynaform::config::Settings;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads ./dynaform.toml and ./config/forms/*
//!     let settings = Settings::new()?;
//!     let registry = Arc::new(FormRegistry::new(settings.forms));
//!     let app = dynaform::create_app(registry);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **Domain**: form definition types shared with the UI over JSON
//! - **Adapters**: HTTP handlers (forms API, health, embedded UI)
//! - **Config**: settings, form file loading and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::form_handler::{self, FormApiState, FormRegistry};
use crate::adapters::health_handler::HealthHandler;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `registry` - Form definitions exposed under `/api/forms`
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(registry: Arc<FormRegistry>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(registry.clone()));

    let api_router = Router::new()
        .route("/forms", get(form_handler::list_forms))
        .route("/forms/:name", get(form_handler::get_form))
        .with_state(FormApiState { registry });

    Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
