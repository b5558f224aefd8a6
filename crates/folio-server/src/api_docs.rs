// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for folio-server.
//!
//! This module provides the OpenAPI 3.0 specification for the Folio
//! Server API, generated from Rust types using utoipa.

use axum::Json;
use utoipa::OpenApi;

/// Main OpenAPI documentation struct.
///
/// This generates the complete OpenAPI specification for the Folio Server
/// API. The raw JSON spec is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Server API",
        version = "1.0.0",
        description = "Book catalog search API. Folio proxies search requests to the Google Books volumes API and aggregates publication statistics over each page of results.",
        license(name = "Proprietary"),
        contact(
            name = "Geoffrey Huntley",
            email = "ghuntley@ghuntley.com",
            url = "https://ghuntley.com"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "books", description = "Book catalog search with page statistics"),
        (name = "health", description = "Health checks and system status")
    ),
    paths(
        crate::routes::books::search_books,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            folio_server_api::SearchResponse,
            folio_server_catalog_google_books::CatalogItem,
            folio_server_catalog_google_books::VolumeInfo,
            crate::error::ErrorResponse,
            crate::health::HealthStatus,
            crate::health::CatalogHealth,
            crate::health::HealthComponents,
            crate::health::HealthResponse,
        )
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - Serve the OpenAPI specification.
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}
