// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the Google Books volumes API.
//!
//! Upstream payloads are only partially under our control, so the typed
//! fields the service actually inspects use lenient deserializers: an
//! absent or malformed collection becomes empty, a malformed scalar
//! becomes `None`. Everything else is carried opaquely in `extra` maps
//! and serialized back out unchanged.

use serde::{Deserialize, Serialize};

/// Request parameters for a volumes search.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone)]
pub struct VolumesRequest {
	pub query: String,
	pub start_index: u32,
	pub max_results: u32,
}

impl VolumesRequest {
	/// Creates a new volumes request with the given query and page window.
	///
	/// Values are passed to the API verbatim; Google enforces its own cap
	/// of 40 results per page.
	pub fn new(query: impl Into<String>, start_index: u32, max_results: u32) -> Self {
		Self {
			query: query.into(),
			start_index,
			max_results,
		}
	}
}

/// One page of volumes returned by the API.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumesPage {
	/// Total number of results for the query across all pages.
	#[serde(
		rename = "totalItems",
		default,
		deserialize_with = "lenient::u64_or_zero"
	)]
	pub total_items: u64,

	/// The items of this page. Absent or malformed becomes empty.
	#[serde(default, deserialize_with = "lenient::items_or_empty")]
	pub items: Vec<CatalogItem>,
}

/// A single catalog item (volume).
///
/// Only the sub-fields the service inspects are typed; unknown fields
/// round-trip through `extra`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItem {
	#[serde(
		default,
		deserialize_with = "lenient::string_or_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub id: Option<String>,

	#[serde(
		rename = "volumeInfo",
		default,
		deserialize_with = "lenient::volume_info_or_default"
	)]
	pub volume_info: VolumeInfo,

	#[serde(flatten)]
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Bibliographic details of a volume.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeInfo {
	#[serde(
		default,
		deserialize_with = "lenient::string_or_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub title: Option<String>,

	/// Author names. Absent or malformed becomes empty.
	#[serde(
		default,
		deserialize_with = "lenient::string_seq_or_empty",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub authors: Vec<String>,

	/// Publication date as reported upstream. Possibly partial
	/// (`YYYY`, `YYYY-MM`, or `YYYY-MM-DD`).
	#[serde(
		rename = "publishedDate",
		default,
		deserialize_with = "lenient::string_or_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub published_date: Option<String>,

	#[serde(
		default,
		deserialize_with = "lenient::string_or_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub description: Option<String>,

	#[serde(flatten)]
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

mod lenient {
	use serde::{Deserialize, Deserializer};
	use serde_json::Value;

	use super::{CatalogItem, VolumeInfo};

	pub(super) fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(value.as_u64().unwrap_or(0))
	}

	pub(super) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(value.as_str().map(str::to_string))
	}

	pub(super) fn string_seq_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Value::deserialize(deserializer)? {
			Value::Array(values) => Ok(values
				.into_iter()
				.filter_map(|v| v.as_str().map(str::to_string))
				.collect()),
			_ => Ok(Vec::new()),
		}
	}

	pub(super) fn items_or_empty<'de, D>(deserializer: D) -> Result<Vec<CatalogItem>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Value::deserialize(deserializer)? {
			// Elements that are not objects cannot be items; drop them.
			Value::Array(values) => Ok(values
				.into_iter()
				.filter_map(|v| serde_json::from_value(v).ok())
				.collect()),
			_ => Ok(Vec::new()),
		}
	}

	pub(super) fn volume_info_or_default<'de, D>(deserializer: D) -> Result<VolumeInfo, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(serde_json::from_value(value).unwrap_or_default())
	}
}
