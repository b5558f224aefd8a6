// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Folio book catalog search server.
//!
//! This crate provides an HTTP server that proxies search requests to the
//! Google Books volumes API and aggregates publication statistics over
//! each page of results.

pub mod aggregate;
pub mod api;
pub mod api_docs;
pub mod error;
pub mod health;
pub mod routes;
pub mod search;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use folio_server_config::ServerConfig;
pub use search::{SearchError, SearchService};
