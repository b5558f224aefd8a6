// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check types and component checking logic.

use serde::Serialize;
use utoipa::ToSchema;

use crate::search::SearchService;

/// Health status for components and overall system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// Catalog provider component health.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogHealth {
	pub status: HealthStatus,
	pub configured: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// All health check components.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub catalog: CatalogHealth,
}

/// Complete health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: String,
	pub components: HealthComponents,
}

/// Check catalog provider health by verifying configuration.
///
/// An unconfigured catalog is degraded, not unhealthy: the server still
/// serves health and documentation endpoints without it.
pub fn check_catalog(service: Option<&SearchService>) -> CatalogHealth {
	match service {
		Some(_) => CatalogHealth {
			status: HealthStatus::Healthy,
			configured: true,
			error: None,
		},
		None => CatalogHealth {
			status: HealthStatus::Degraded,
			configured: false,
			error: Some("Google Books catalog is not configured".to_string()),
		},
	}
}

/// Aggregate component statuses into overall status.
pub fn aggregate_status(components: &HealthComponents) -> HealthStatus {
	let statuses = [components.catalog.status];

	if statuses
		.iter()
		.any(|s| matches!(s, HealthStatus::Unhealthy))
	{
		HealthStatus::Unhealthy
	} else if statuses.iter().any(|s| matches!(s, HealthStatus::Degraded)) {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	}
}
