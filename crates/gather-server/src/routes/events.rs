// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Event HTTP handlers.
//!
//! Reads are unrestricted. Mutations are authorized by comparing the caller's
//! observed IP address against the event's creator IP; the external outcomes
//! on failure differ by operation (404 on update, 403 on delete) and that
//! asymmetry is part of the contract.

use std::net::SocketAddr;

use axum::{
	extract::{ConnectInfo, Path, Query, State},
	http::{HeaderMap, StatusCode},
	response::IntoResponse,
	Json,
};

use gather_server_api::{
	CreateEventRequest, DeleteEventResponse, EventErrorResponse, EventResponse, LocationResponse,
	RangeQuery, TimezoneResponse, UpdateEventRequest,
};
use gather_server_events::EventServiceError;

use crate::{
	api::AppState,
	api_response::{internal_error, not_found},
	client_info::client_ip,
	impl_api_error_response,
};

impl_api_error_response!(EventErrorResponse);

#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events", body = [EventResponse])
    ),
    tag = "events"
)]
/// GET /events - List all events.
pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
	match state.event_service.list_all().await {
		Ok(events) => {
			let events: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
			Json(events).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "Failed to list events");
			internal_error::<EventErrorResponse>("Failed to list events").into_response()
		}
	}
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "The event", body = EventResponse),
        (status = 404, description = "Event not found", body = EventErrorResponse)
    ),
    tag = "events"
)]
/// GET /events/{id} - Get one event. Reads are unrestricted.
pub async fn get_event(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
	match state.event_service.get_by_id(id).await {
		Ok(Some(event)) => Json(EventResponse::from(event)).into_response(),
		Ok(None) => not_found::<EventErrorResponse>("Event not found").into_response(),
		Err(e) => {
			tracing::error!(error = %e, event_id = id, "Failed to get event");
			internal_error::<EventErrorResponse>("Failed to get event").into_response()
		}
	}
}

#[utoipa::path(
    get,
    path = "/events/user",
    responses(
        (status = 200, description = "Events created by the caller's IP", body = [EventResponse])
    ),
    tag = "events"
)]
/// GET /events/user - List events created by the caller's IP address.
pub async fn list_user_events(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	headers: HeaderMap,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);

	match state.event_service.list_by_creator(&ip).await {
		Ok(events) => {
			let events: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
			Json(events).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "Failed to list user events");
			internal_error::<EventErrorResponse>("Failed to list user events").into_response()
		}
	}
}

#[utoipa::path(
    get,
    path = "/events/range",
    params(RangeQuery),
    responses(
        (status = 200, description = "Events starting within the range, inclusive", body = [EventResponse])
    ),
    tag = "events"
)]
/// GET /events/range?start&end - List events whose start time lies within
/// `[start, end]` (ISO-8601 date-times, both ends inclusive).
pub async fn list_events_in_range(
	State(state): State<AppState>,
	Query(range): Query<RangeQuery>,
) -> impl IntoResponse {
	match state.event_service.list_by_range(range.start, range.end).await {
		Ok(events) => {
			let events: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
			Json(events).into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, "Failed to list events in range");
			internal_error::<EventErrorResponse>("Failed to list events in range").into_response()
		}
	}
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "The created event", body = EventResponse)
    ),
    tag = "events"
)]
/// POST /events - Create an event owned by the caller's IP address.
///
/// When the submitted timezone is omitted or empty it is filled from the
/// caller's IP-resolved timezone before the event is persisted.
pub async fn create_event(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	headers: HeaderMap,
	Json(payload): Json<CreateEventRequest>,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);
	let location = state.resolver.resolve_location(&ip);

	let timezone = match payload.submitted_timezone() {
		Some(tz) => tz.to_string(),
		None => state.resolver.resolve_timezone(&ip),
	};
	let draft = payload.into_draft(Some(timezone));

	match state.event_service.create(draft, &ip, &location).await {
		Ok(event) => (StatusCode::CREATED, Json(EventResponse::from(event))).into_response(),
		Err(e) => {
			tracing::error!(error = %e, "Failed to create event");
			internal_error::<EventErrorResponse>("Failed to create event").into_response()
		}
	}
}

#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "The updated event", body = EventResponse),
        (status = 404, description = "Event absent or caller is not the creator", body = EventErrorResponse)
    ),
    tag = "events"
)]
/// PUT /events/{id} - Update an event. Only the creating IP address may
/// update; an unauthorized caller receives the same 404 as an absent id.
pub async fn update_event(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	Path(id): Path<i64>,
	headers: HeaderMap,
	Json(payload): Json<UpdateEventRequest>,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);
	let location = state.resolver.resolve_location(&ip);

	match state
		.event_service
		.update(id, payload.into_draft(), &ip, &location)
		.await
	{
		Ok(event) => Json(EventResponse::from(event)).into_response(),
		Err(EventServiceError::NotFound(_)) | Err(EventServiceError::Unauthorized(_)) => {
			not_found::<EventErrorResponse>("Event not found").into_response()
		}
		Err(e) => {
			tracing::error!(error = %e, event_id = id, "Failed to update event");
			internal_error::<EventErrorResponse>("Failed to update event").into_response()
		}
	}
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event deleted", body = DeleteEventResponse),
        (status = 403, description = "Event absent or caller is not the creator", body = DeleteEventResponse)
    ),
    tag = "events"
)]
/// DELETE /events/{id} - Delete an event. Only the creating IP address may
/// delete; an absent id and a mismatched caller produce the same 403.
pub async fn delete_event(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	Path(id): Path<i64>,
	headers: HeaderMap,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);
	let location = state.resolver.resolve_location(&ip);

	match state.event_service.delete(id, &ip, &location).await {
		Ok(true) => Json(DeleteEventResponse {
			success: true,
			message: None,
		})
		.into_response(),
		Ok(false) => (
			StatusCode::FORBIDDEN,
			Json(DeleteEventResponse {
				success: false,
				message: Some("Not authorized or event not found".to_string()),
			}),
		)
			.into_response(),
		Err(e) => {
			tracing::error!(error = %e, event_id = id, "Failed to delete event");
			internal_error::<EventErrorResponse>("Failed to delete event").into_response()
		}
	}
}

#[utoipa::path(
    get,
    path = "/events/timezone",
    responses(
        (status = 200, description = "The caller's resolved timezone", body = TimezoneResponse)
    ),
    tag = "events"
)]
/// GET /events/timezone - Resolve the caller's timezone from its IP address.
pub async fn get_user_timezone(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	headers: HeaderMap,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);
	let timezone = state.resolver.resolve_timezone(&ip);
	Json(TimezoneResponse { timezone })
}

#[utoipa::path(
    get,
    path = "/events/location",
    responses(
        (status = 200, description = "The caller's resolved location", body = LocationResponse)
    ),
    tag = "events"
)]
/// GET /events/location - Resolve the caller's location from its IP address.
pub async fn get_user_location(
	State(state): State<AppState>,
	ConnectInfo(peer): ConnectInfo<SocketAddr>,
	headers: HeaderMap,
) -> impl IntoResponse {
	let ip = client_ip(&headers, peer);
	let location = state.resolver.resolve_location(&ip);
	Json(LocationResponse { location })
}
