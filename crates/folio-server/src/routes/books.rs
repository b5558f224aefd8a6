// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Book catalog search HTTP handler.

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::IntoResponse,
	Json,
};
use folio_server_catalog_google_books::CatalogError;

pub use folio_server_api::{SearchParams, SearchResponse};

use crate::{api::AppState, error::ServerError, search::SearchError};

#[utoipa::path(
    get,
    path = "/api/books",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results with page statistics", body = SearchResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 502, description = "Upstream catalog error", body = crate::error::ErrorResponse),
        (status = 503, description = "Catalog not configured", body = crate::error::ErrorResponse),
        (status = 504, description = "Upstream catalog timeout", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
/// GET /api/books - Search the book catalog.
#[axum::debug_handler]
pub async fn search_books(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ServerError> {
	// Reject invalid input before touching server state, so clients get
	// a 400 even when the catalog is not configured.
	if params.query.trim().is_empty() {
		tracing::warn!("search_books: empty query");
		return Err(ServerError::BadRequest("Query is missing".into()));
	}
	if params.limit == 0 {
		tracing::warn!("search_books: zero limit");
		return Err(ServerError::BadRequest("limit must be at least 1".into()));
	}

	// Get search service from state, or report the catalog as unavailable
	let service = state.search_service.as_ref().ok_or_else(|| {
		tracing::warn!("search_books: catalog not configured");
		ServerError::ServiceUnavailable(
			"Book catalog is not configured on the server".to_string(),
		)
	})?;

	let response = service.search(&params).await.map_err(|e| match e {
		SearchError::InvalidRequest(msg) => {
			tracing::warn!(error = %msg, "search_books: invalid request");
			ServerError::BadRequest(msg)
		}
		SearchError::Catalog(CatalogError::Timeout) => {
			tracing::warn!("search_books: timeout contacting Google Books");
			ServerError::UpstreamTimeout("Google Books request timed out".into())
		}
		SearchError::Catalog(CatalogError::Network(e)) => {
			tracing::error!(error = %e, "search_books: network error");
			ServerError::UpstreamError(format!("Failed to contact Google Books: {e}"))
		}
		SearchError::Catalog(CatalogError::InvalidResponse(msg)) => {
			tracing::error!(error = %msg, "search_books: invalid response");
			ServerError::UpstreamError(format!("Invalid Google Books response: {msg}"))
		}
		SearchError::Catalog(CatalogError::ApiError { status, message }) => {
			tracing::warn!(status = status, message = %message, "search_books: API error");
			ServerError::UpstreamError(format!("Google Books error: {status} - {message}"))
		}
	})?;

	tracing::info!(
			query = %params.query,
			total_results = response.total_results,
			items = response.items.len(),
			response_time_ms = response.response_time_ms,
			"search_books: returning results"
	);

	Ok((StatusCode::OK, Json(response)))
}
