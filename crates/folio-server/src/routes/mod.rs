// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers organized by concern.

pub mod books;
pub mod health;

// Re-export API types from folio-server-api for handler consumers
pub use folio_server_api::{SearchParams, SearchResponse};
