// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for folio-server.

pub mod catalog;
pub mod http;
pub mod logging;

pub use catalog::{CatalogConfig, CatalogConfigLayer, GoogleBooksConfig, GoogleBooksConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
