// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Books volumes API client implementation.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::CatalogError;
use crate::types::{VolumesPage, VolumesRequest};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const VOLUMES_PATH: &str = "/books/v1/volumes";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for interacting with the Google Books volumes API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
	http_client: Client,
	api_key: String,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
	error: Option<GoogleBooksError>,
	#[serde(flatten)]
	page: VolumesPage,
}

#[derive(Debug, Deserialize)]
struct GoogleBooksError {
	code: u16,
	message: String,
}

impl CatalogClient {
	/// Creates a new catalog client with the given API key.
	pub fn new(api_key: impl Into<String>) -> Self {
		let http_client = folio_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets a custom request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.http_client = folio_common_http::builder()
			.timeout(timeout)
			.build()
			.expect("Failed to create HTTP client");
		self
	}

	/// Searches the volumes catalog.
	#[instrument(skip(self), fields(
		query = %request.query,
		start_index = request.start_index,
		max_results = request.max_results
	))]
	pub async fn volumes(&self, request: &VolumesRequest) -> Result<VolumesPage, CatalogError> {
		let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), VOLUMES_PATH);
		let mut url = Url::parse(&endpoint)
			.map_err(|e| CatalogError::InvalidResponse(format!("Invalid base URL: {e}")))?;

		url.query_pairs_mut()
			.append_pair("key", &self.api_key)
			.append_pair("q", &request.query)
			.append_pair("startIndex", &request.start_index.to_string())
			.append_pair("maxResults", &request.max_results.to_string());

		debug!(url = %endpoint, "Sending volumes request to Google Books");
		trace!(
			query = %request.query,
			start_index = request.start_index,
			max_results = request.max_results,
			"Search parameters"
		);

		let response = self.http_client.get(url).send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
				return CatalogError::Timeout;
			}
			error!(error = %e, "Network error during Google Books request");
			CatalogError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Google Books");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			error!(status = status_code, body = %body, "Google Books API error");
			return Err(CatalogError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			CatalogError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let books_response: GoogleBooksResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Google Books response");
			CatalogError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if let Some(error) = books_response.error {
			error!(code = error.code, message = %error.message, "Google Books returned error");
			return Err(CatalogError::ApiError {
				status: error.code,
				message: error.message,
			});
		}

		debug!(
			total_items = books_response.page.total_items,
			item_count = books_response.page.items.len(),
			"Volumes request completed successfully"
		);

		Ok(books_response.page)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = CatalogClient::new("test-api-key");
		assert_eq!(client.api_key, "test-api-key");
		assert_eq!(client.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url() {
		let client = CatalogClient::new("key").with_base_url("https://custom.api.com");
		assert_eq!(client.base_url, "https://custom.api.com");
	}

	#[test]
	fn test_with_base_url_tolerates_trailing_slash() {
		let client = CatalogClient::new("key").with_base_url("https://custom.api.com/");
		assert_eq!(client.base_url, "https://custom.api.com/");
	}
}
