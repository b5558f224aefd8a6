// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Books volumes API client for Folio.
//!
//! This crate provides a typed Rust client for the Google Books volumes
//! API, encapsulating HTTP communication and response parsing. Transport
//! failures (no response) and upstream error statuses (response received)
//! surface as distinct error variants so callers can tell them apart.

pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{CatalogItem, VolumeInfo, VolumesPage, VolumesRequest};
