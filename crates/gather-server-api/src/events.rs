// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use gather_events_core::{Event, EventDraft};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

/// An event in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EventResponse {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub start_time: NaiveDateTime,
	pub end_time: NaiveDateTime,
	pub location: Option<String>,
	pub timezone: Option<String>,
	pub created_by: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: Option<DateTime<Utc>>,
}

impl From<Event> for EventResponse {
	fn from(event: Event) -> Self {
		Self {
			id: event.id,
			title: event.title,
			description: event.description,
			start_time: event.start_time,
			end_time: event.end_time,
			location: event.location,
			timezone: event.timezone,
			created_by: event.created_by,
			created_at: event.created_at,
			updated_at: event.updated_at,
		}
	}
}

/// Request body for creating an event.
///
/// An omitted or empty timezone is filled server-side from the caller's
/// IP-resolved timezone before the event is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateEventRequest {
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	pub start_time: NaiveDateTime,
	pub end_time: NaiveDateTime,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub timezone: Option<String>,
}

impl CreateEventRequest {
	/// The timezone as submitted, with empty strings treated as absent.
	pub fn submitted_timezone(&self) -> Option<&str> {
		self.timezone.as_deref().filter(|tz| !tz.is_empty())
	}

	pub fn into_draft(self, timezone: Option<String>) -> EventDraft {
		EventDraft {
			title: self.title,
			description: self.description,
			start_time: self.start_time,
			end_time: self.end_time,
			location: self.location,
			timezone,
		}
	}
}

/// Request body for updating an event. The submitted fields overwrite the
/// stored ones wholesale; creator IP and creation time are not settable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateEventRequest {
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	pub start_time: NaiveDateTime,
	pub end_time: NaiveDateTime,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub timezone: Option<String>,
}

impl UpdateEventRequest {
	pub fn into_draft(self) -> EventDraft {
		EventDraft {
			title: self.title,
			description: self.description,
			start_time: self.start_time,
			end_time: self.end_time,
			location: self.location,
			timezone: self.timezone,
		}
	}
}

/// Query parameters for the start-time range listing (ISO-8601 date-times,
/// both ends inclusive).
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
pub struct RangeQuery {
	pub start: NaiveDateTime,
	pub end: NaiveDateTime,
}

/// Response for event deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DeleteEventResponse {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Response for the caller-timezone endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TimezoneResponse {
	pub timezone: String,
}

/// Response for the caller-location endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LocationResponse {
	pub location: String,
}

/// Error response for event operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EventErrorResponse {
	pub error: String,
	pub message: String,
}
