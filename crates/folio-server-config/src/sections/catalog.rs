// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Book catalog provider configuration section.

use folio_common_config::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfigLayer {
	#[serde(default)]
	pub google_books: Option<GoogleBooksConfigLayer>,
}

impl CatalogConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_google) = other.google_books {
			let google = self.google_books.get_or_insert_with(Default::default);
			google.merge(other_google);
		}
	}

	pub fn finalize(self) -> CatalogConfig {
		CatalogConfig {
			google_books: self.google_books.map(|g| g.finalize()).unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleBooksConfigLayer {
	pub api_key: Option<SecretString>,
	pub base_url: Option<String>,
}

impl GoogleBooksConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> GoogleBooksConfig {
		GoogleBooksConfig {
			api_key: self.api_key,
			base_url: self.base_url,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
	#[serde(default)]
	pub google_books: GoogleBooksConfig,
}

impl CatalogConfig {
	pub fn has_provider(&self) -> bool {
		self.google_books.is_configured()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleBooksConfig {
	/// API key passed to the volumes API. The client stays unconfigured
	/// without one.
	pub api_key: Option<SecretString>,
	/// Override of the API base URL. `None` uses the client default.
	pub base_url: Option<String>,
}

impl GoogleBooksConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}
