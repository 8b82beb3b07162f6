// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};

use gather_events_core::{Event, EventDraft, SessionAction, SessionLogEntry};
use gather_server_audit::SessionLogService;
use gather_server_db::{EventRepository, SessionLogRepository};

use crate::error::{EventServiceError, Result};

/// Orchestrates event reads and writes.
///
/// Reads carry no authorization check and no side effects. Every successful
/// mutation queues exactly one session-log record; the session log is
/// best-effort and can never fail the mutation.
pub struct EventService {
	events: Arc<EventRepository>,
	session_logs: Arc<SessionLogRepository>,
	audit: Arc<SessionLogService>,
}

impl EventService {
	pub fn new(
		events: Arc<EventRepository>,
		session_logs: Arc<SessionLogRepository>,
		audit: Arc<SessionLogService>,
	) -> Self {
		Self {
			events,
			session_logs,
			audit,
		}
	}

	/// List every event.
	pub async fn list_all(&self) -> Result<Vec<Event>> {
		Ok(self.events.list_all().await?)
	}

	/// Get one event by id.
	pub async fn get_by_id(&self, id: i64) -> Result<Option<Event>> {
		Ok(self.events.get(id).await?)
	}

	/// List events created by the given IP address.
	pub async fn list_by_creator(&self, ip: &str) -> Result<Vec<Event>> {
		Ok(self.events.list_by_creator(ip).await?)
	}

	/// List events whose start time lies in `[start, end]`, inclusive.
	pub async fn list_by_range(
		&self,
		start: NaiveDateTime,
		end: NaiveDateTime,
	) -> Result<Vec<Event>> {
		Ok(self.events.list_by_start_range(start, end).await?)
	}

	/// Create an event owned by `ip`.
	///
	/// The draft's timezone must already be populated by the caller; this
	/// service does not resolve timezones. Creation carries no ownership
	/// check.
	#[tracing::instrument(skip(self, draft, location), fields(ip = %ip))]
	pub async fn create(&self, draft: EventDraft, ip: &str, location: &str) -> Result<Event> {
		let event = self.events.insert(&draft, ip, Utc::now()).await?;

		self
			.audit
			.record(ip, SessionAction::CreateEvent, Some(event.id), location);

		Ok(event)
	}

	/// Update an event, owner only.
	///
	/// Overwrites title, description, start/end times, location and timezone;
	/// `created_by` and `created_at` are never touched.
	#[tracing::instrument(skip(self, draft, location), fields(ip = %ip))]
	pub async fn update(
		&self,
		id: i64,
		draft: EventDraft,
		ip: &str,
		location: &str,
	) -> Result<Event> {
		let existing = self
			.events
			.get(id)
			.await?
			.ok_or(EventServiceError::NotFound(id))?;

		if !existing.is_owned_by(ip) {
			tracing::debug!(event_id = id, "update rejected, caller is not the creator");
			return Err(EventServiceError::Unauthorized(id));
		}

		let updated = self
			.events
			.update_fields(id, &draft, Utc::now())
			.await?
			.ok_or(EventServiceError::NotFound(id))?;

		self
			.audit
			.record(ip, SessionAction::UpdateEvent, Some(id), location);

		Ok(updated)
	}

	/// Delete an event, owner only.
	///
	/// Returns `false` both when the id does not exist and when the caller is
	/// not the creator; the two cases are deliberately indistinguishable.
	#[tracing::instrument(skip(self, location), fields(ip = %ip))]
	pub async fn delete(&self, id: i64, ip: &str, location: &str) -> Result<bool> {
		let Some(existing) = self.events.get(id).await? else {
			return Ok(false);
		};

		if !existing.is_owned_by(ip) {
			tracing::debug!(event_id = id, "delete rejected, caller is not the creator");
			return Ok(false);
		}

		let deleted = self.events.delete(id).await?;
		if deleted {
			self
				.audit
				.record(ip, SessionAction::DeleteEvent, Some(id), location);
		}

		Ok(deleted)
	}

	/// Session-log entries recorded for an actor IP.
	pub async fn logs_by_ip(&self, ip: &str) -> Result<Vec<SessionLogEntry>> {
		Ok(self.session_logs.list_by_ip(ip).await?)
	}

	/// Session-log entries referencing an event id, including deletions.
	pub async fn logs_by_event(&self, event_id: i64) -> Result<Vec<SessionLogEntry>> {
		Ok(self.session_logs.list_by_event(event_id).await?)
	}
}
