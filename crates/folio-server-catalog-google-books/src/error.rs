// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google Books volumes client.

use thiserror::Error;

/// Errors that can occur when interacting with the Google Books API.
///
/// `Network` and `Timeout` mean no usable response arrived; `ApiError`
/// means the upstream answered with a failure status, preserved together
/// with the response body.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Invalid or unparseable response from Google Books.
	#[error("Invalid response from Google Books: {0}")]
	InvalidResponse(String),

	/// Google Books API returned an error status.
	#[error("Google Books API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
