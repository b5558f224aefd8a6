// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Book search API types.

use folio_server_catalog_google_books::CatalogItem;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
	10
}

/// Query parameters for the book search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct SearchParams {
	/// Free-text search query.
	pub query: String,
	/// Number of leading results to skip (default: 0).
	#[serde(default)]
	pub skip: u32,
	/// Maximum number of results in the page (default: 10).
	#[serde(default = "default_limit")]
	pub limit: u32,
}

/// Response for the book search endpoint.
///
/// Statistics are derived from the returned page only, never across
/// pages. Field names are the wire contract consumed by the web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Total number of results for the query across all pages.
	pub total_results: u64,
	/// Most frequent author within this page, or "N/A" when the page
	/// carries no authors.
	pub most_common_author: String,
	/// Earliest publication date within this page (`YYYY-MM-DD`).
	/// Omitted when no item carries a parseable date.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub earliest_publication_date: Option<String>,
	/// Most recent publication date within this page (`YYYY-MM-DD`).
	/// Omitted when no item carries a parseable date.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub most_recent_publication_date: Option<String>,
	/// Upstream round-trip time in whole milliseconds.
	pub response_time_ms: u64,
	/// The catalog items of this page, passed through unchanged.
	pub items: Vec<CatalogItem>,
}
