// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Folio.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header.

mod client;

pub use client::{builder, new_client, user_agent};
