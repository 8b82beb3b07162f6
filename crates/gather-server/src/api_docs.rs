// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation aggregation.

use utoipa::OpenApi;

use gather_server_api::{
	CreateEventRequest, DeleteEventResponse, EventErrorResponse, EventResponse, LocationResponse,
	TimezoneResponse, UpdateEventRequest,
};

use crate::routes;

#[derive(OpenApi)]
#[openapi(
	paths(
		routes::events::list_events,
		routes::events::get_event,
		routes::events::list_user_events,
		routes::events::list_events_in_range,
		routes::events::create_event,
		routes::events::update_event,
		routes::events::delete_event,
		routes::events::get_user_timezone,
		routes::events::get_user_location,
		routes::health::health_check,
	),
	components(schemas(
		CreateEventRequest,
		DeleteEventResponse,
		EventErrorResponse,
		EventResponse,
		LocationResponse,
		TimezoneResponse,
		UpdateEventRequest,
		routes::health::ComponentHealth,
		routes::health::HealthComponents,
		routes::health::HealthResponse,
		routes::health::HealthStatus,
	)),
	tags(
		(name = "events", description = "Event booking operations"),
		(name = "health", description = "Service health")
	)
)]
pub struct ApiDoc;
