// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP API routes and application state.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use sqlx::SqlitePool;
use utoipa::OpenApi;

use gather_server_audit::{
	SessionLogService, SessionLogSink, SqliteSessionLogSink, TracingSessionLogSink,
};
use gather_server_events::EventService;
use gather_server_geoip::LocationResolver;

use crate::db::{EventRepository, SessionLogRepository};
use crate::routes;

/// Capacity of the session-log queue. Records beyond this are dropped with a
/// warning rather than blocking request handling.
pub const SESSION_LOG_QUEUE_CAPACITY: usize = 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub event_service: Arc<EventService>,
	pub resolver: Arc<LocationResolver>,
	pub pool: SqlitePool,
}

/// Creates the application state, wiring repositories, the session-log
/// pipeline and the event service over one pool.
pub fn create_app_state(pool: SqlitePool, resolver: LocationResolver) -> AppState {
	let event_repo = Arc::new(EventRepository::new(pool.clone()));
	let session_log_repo = Arc::new(SessionLogRepository::new(pool.clone()));

	let sinks: Vec<Arc<dyn SessionLogSink>> = vec![
		Arc::new(SqliteSessionLogSink::new(pool.clone())),
		Arc::new(TracingSessionLogSink::new()),
	];
	let session_log_service = Arc::new(SessionLogService::new(SESSION_LOG_QUEUE_CAPACITY, sinks));

	let event_service = Arc::new(EventService::new(
		event_repo,
		session_log_repo,
		session_log_service,
	));

	AppState {
		event_service,
		resolver: Arc::new(resolver),
		pool,
	}
}

/// Creates the application router.
///
/// Static segments under `/events` are registered alongside the `{id}`
/// capture; axum matches them ahead of the parameterized route.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route(
			"/api-docs/openapi.json",
			get(|| async { Json(crate::api_docs::ApiDoc::openapi()) }),
		)
		.route(
			"/events",
			get(routes::events::list_events).post(routes::events::create_event),
		)
		.route("/events/user", get(routes::events::list_user_events))
		.route("/events/range", get(routes::events::list_events_in_range))
		.route("/events/timezone", get(routes::events::get_user_timezone))
		.route("/events/location", get(routes::events::get_user_location))
		.route(
			"/events/{id}",
			get(routes::events::get_event)
				.put(routes::events::update_event)
				.delete(routes::events::delete_event),
		)
		.with_state(state)
}
