// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared helpers for server integration tests.

use std::net::SocketAddr;
use std::str::FromStr;

use axum::body::Body;
use axum::extract::connect_info::ConnectInfo;
use axum::http::{header, Request};
use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use gather_server::{create_app_state, create_router};
use gather_server_geoip::LocationResolver;

/// Pinned fallback timezone so assertions do not depend on the host's zone.
pub const DEFAULT_TEST_TIMEZONE: &str = "Australia/Brisbane";

/// Build a router over a fresh in-memory database with migrations applied
/// and no GeoIP database (resolution degrades to its fixed fallbacks).
pub async fn test_app() -> (Router, SqlitePool) {
	let options = SqliteConnectOptions::from_str(":memory:")
		.unwrap()
		.create_if_missing(true);
	// A single connection: each :memory: connection is its own database.
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(options)
		.await
		.expect("Failed to create test pool");

	gather_server::db::run_migrations(&pool).await.unwrap();

	let resolver = LocationResolver::disabled().with_default_timezone(DEFAULT_TEST_TIMEZONE);
	let state = create_app_state(pool.clone(), resolver);
	(create_router(state), pool)
}

/// Build a request carrying `ip` as the caller's address.
///
/// The `ConnectInfo` extension stands in for what `axum::serve` would insert
/// for a real connection; the header is what a reverse proxy would add.
pub fn request(
	method: &str,
	uri: &str,
	ip: &str,
	body: Option<serde_json::Value>,
) -> Request<Body> {
	let builder = Request::builder()
		.method(method)
		.uri(uri)
		.header("x-forwarded-for", ip);

	let mut request = match body {
		Some(json) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(json.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	};

	request
		.extensions_mut()
		.insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
	request
}

/// Collect a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}
