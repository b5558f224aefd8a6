// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Catalog search service: validation, upstream call, aggregation.

use std::sync::Arc;

use folio_server_api::{SearchParams, SearchResponse};
use folio_server_catalog_google_books::{CatalogClient, CatalogError, VolumesRequest};
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::aggregate;

/// Errors produced by [`SearchService::search`].
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
	/// Request failed validation; no upstream call was made.
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	/// The upstream catalog call failed.
	#[error("Catalog error: {0}")]
	Catalog(#[from] CatalogError),
}

/// Executes catalog searches and derives page statistics.
///
/// Each call is self-contained: the service holds no per-request state
/// beyond the shared HTTP client, so concurrent searches never observe
/// each other.
#[derive(Clone)]
pub struct SearchService {
	catalog: Arc<CatalogClient>,
}

impl SearchService {
	pub fn new(catalog: Arc<CatalogClient>) -> Self {
		Self { catalog }
	}

	/// Run one search and aggregate statistics over the returned page.
	///
	/// `response_time_ms` measures the upstream round trip only, not
	/// validation or aggregation.
	#[instrument(skip(self), fields(query = %params.query, skip = params.skip, limit = params.limit))]
	pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, SearchError> {
		let query = params.query.trim();
		if query.is_empty() {
			return Err(SearchError::InvalidRequest("Query is missing".to_string()));
		}
		if params.limit == 0 {
			return Err(SearchError::InvalidRequest(
				"limit must be at least 1".to_string(),
			));
		}

		let request = VolumesRequest::new(query, params.skip, params.limit);

		let started = Instant::now();
		let page = self.catalog.volumes(&request).await?;
		let response_time_ms = started.elapsed().as_millis() as u64;

		let most_common_author = aggregate::most_common_author(&page.items);
		let (earliest_publication_date, most_recent_publication_date) =
			aggregate::publication_date_range(&page.items);

		debug!(
			total_results = page.total_items,
			items = page.items.len(),
			response_time_ms,
			"search complete"
		);

		Ok(SearchResponse {
			total_results: page.total_items,
			most_common_author,
			earliest_publication_date,
			most_recent_publication_date,
			response_time_ms,
			items: page.items,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn params(query: &str, skip: u32, limit: u32) -> SearchParams {
		SearchParams {
			query: query.to_string(),
			skip,
			limit,
		}
	}

	fn service_for(mock: &MockServer) -> SearchService {
		let client = CatalogClient::new("test-key").with_base_url(mock.uri());
		SearchService::new(Arc::new(client))
	}

	#[tokio::test]
	async fn test_empty_query_fails_without_upstream_call() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
			.expect(0)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let result = service.search(&params("", 0, 10)).await;
		assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
	}

	#[tokio::test]
	async fn test_whitespace_query_fails_without_upstream_call() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
			.expect(0)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let result = service.search(&params("   \t", 0, 10)).await;
		assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
	}

	#[tokio::test]
	async fn test_zero_limit_fails_without_upstream_call() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
			.expect(0)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let result = service.search(&params("habits", 0, 0)).await;
		assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
	}

	#[tokio::test]
	async fn test_search_aggregates_page_statistics() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/books/v1/volumes"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"totalItems": 2162,
				"items": [
					{"volumeInfo": {"authors": ["James Clear"], "publishedDate": "2018-10-16"}},
					{"volumeInfo": {"authors": ["BJ Fogg"], "publishedDate": "2019-12-31"}},
					{"volumeInfo": {"authors": ["James Clear"], "publishedDate": "2014"}}
				]
			})))
			.expect(1)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let response = service.search(&params("habits", 0, 10)).await.unwrap();

		assert_eq!(response.total_results, 2162);
		assert_eq!(response.most_common_author, "James Clear");
		assert_eq!(
			response.earliest_publication_date.as_deref(),
			Some("2014-01-01")
		);
		assert_eq!(
			response.most_recent_publication_date.as_deref(),
			Some("2019-12-31")
		);
		assert_eq!(response.items.len(), 3);
	}

	#[tokio::test]
	async fn test_query_is_trimmed_before_upstream_call() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.and(wiremock::matchers::query_param("q", "atomic habits"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalItems": 0})))
			.expect(1)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let response = service
			.search(&params("  atomic habits  ", 0, 10))
			.await
			.unwrap();
		assert_eq!(response.total_results, 0);
	}

	#[tokio::test]
	async fn test_empty_page_uses_fallbacks() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let response = service.search(&params("obscure", 0, 10)).await.unwrap();

		assert_eq!(response.total_results, 0);
		assert_eq!(response.most_common_author, "N/A");
		assert!(response.earliest_publication_date.is_none());
		assert!(response.most_recent_publication_date.is_none());
		assert!(response.items.is_empty());
	}

	#[tokio::test]
	async fn test_response_time_covers_upstream_delay() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(json!({"totalItems": 0}))
					.set_delay(std::time::Duration::from_millis(100)),
			)
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let response = service.search(&params("habits", 0, 10)).await.unwrap();
		assert!(
			response.response_time_ms >= 100,
			"expected at least the injected delay, got {}ms",
			response.response_time_ms
		);
	}

	#[tokio::test]
	async fn test_upstream_error_propagates_as_catalog_error() {
		let mock = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
			.mount(&mock)
			.await;

		let service = service_for(&mock);
		let result = service.search(&params("habits", 0, 10)).await;
		match result {
			Err(SearchError::Catalog(CatalogError::ApiError { status, message })) => {
				assert_eq!(status, 500);
				assert_eq!(message, "Internal Server Error");
			}
			other => panic!("expected ApiError, got {other:?}"),
		}
	}
}
