// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Server error types for catalog search operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request payload or query parameters.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// Internal server error.
	#[error("Internal error: {0}")]
	Internal(String),

	/// Upstream service returned an error.
	#[error("Upstream error: {0}")]
	UpstreamError(String),

	/// Upstream service timed out.
	#[error("Upstream timeout: {0}")]
	UpstreamTimeout(String),

	/// Service temporarily unavailable (e.g., catalog not configured).
	#[error("Service unavailable: {0}")]
	ServiceUnavailable(String),
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::BadRequest(msg) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse {
					error: "bad_request".to_string(),
					message: msg.clone(),
				},
			),
			ServerError::Internal(msg) => {
				tracing::error!(error = %msg, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse {
						error: "internal_error".to_string(),
						message: "An internal error occurred".to_string(),
					},
				)
			}
			ServerError::UpstreamError(msg) => {
				tracing::warn!(error = %msg, "upstream error");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse {
						error: "upstream_error".to_string(),
						message: msg.clone(),
					},
				)
			}
			ServerError::UpstreamTimeout(msg) => {
				tracing::warn!(error = %msg, "upstream timeout");
				(
					StatusCode::GATEWAY_TIMEOUT,
					ErrorResponse {
						error: "upstream_timeout".to_string(),
						message: msg.clone(),
					},
				)
			}
			ServerError::ServiceUnavailable(msg) => {
				tracing::warn!(error = %msg, "service unavailable");
				(
					StatusCode::SERVICE_UNAVAILABLE,
					ErrorResponse {
						error: "service_unavailable".to_string(),
						message: msg.clone(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
