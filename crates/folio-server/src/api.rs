// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP API routes and application state.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use folio_server_catalog_google_books::CatalogClient;
use folio_server_config::ServerConfig;

use crate::{routes, search::SearchService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub search_service: Option<Arc<SearchService>>,
}

/// Creates the application state, initializing optional components.
///
/// The catalog client is optional: without an API key the server still
/// starts and serves health and documentation endpoints, and reports the
/// catalog as unavailable.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let google = &config.catalog.google_books;

	let search_service = if let Some(api_key) = &google.api_key {
		tracing::info!("Google Books catalog configured, creating client");
		let mut client = CatalogClient::new(api_key.expose().clone());
		if let Some(base_url) = &google.base_url {
			tracing::info!(base_url = %base_url, "using custom Google Books base URL");
			client = client.with_base_url(base_url.clone());
		}
		Some(Arc::new(SearchService::new(Arc::new(client))))
	} else {
		tracing::info!("Google Books catalog not configured");
		None
	};

	AppState { search_service }
}

/// Creates the application router with all routes.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		// Health
		.route("/health", get(routes::health::health_check))
		// Book catalog search
		.route("/api/books", get(routes::books::search_books))
		// OpenAPI documentation
		.route(
			"/api-docs/openapi.json",
			get(crate::api_docs::serve_openapi),
		)
		.with_state(state)
}
