// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gather event booking server.
//!
//! This crate provides an HTTP server for event CRUD with IP-ownership
//! authorization, GeoIP-based location/timezone resolution, and an
//! append-only session log of mutating actions.

pub mod api;
pub mod api_docs;
pub mod api_response;
pub mod client_info;
pub mod db;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use gather_server_config::ServerConfig;
