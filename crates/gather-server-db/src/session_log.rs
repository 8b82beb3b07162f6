// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session log repository (read path).
//!
//! Writes go through the session-log pipeline's SQLite sink; this repository
//! only exposes the lookup shapes the system supports: by actor IP and by
//! event id. The table is append-only, so there is no update or delete here.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use gather_events_core::{SessionAction, SessionLogEntry};

use crate::error::Result;

#[derive(sqlx::FromRow)]
struct SessionLogRow {
	id: i64,
	ip_address: String,
	action: String,
	event_id: Option<i64>,
	location: Option<String>,
	timestamp: String,
}

impl SessionLogRow {
	fn into_entry(self) -> Option<SessionLogEntry> {
		let action: SessionAction = self.action.parse().ok()?;
		let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
			.map(|dt| dt.with_timezone(&Utc))
			.ok()?;

		Some(SessionLogEntry {
			id: self.id,
			ip_address: self.ip_address,
			action,
			event_id: self.event_id,
			location: self.location,
			timestamp,
		})
	}
}

/// Repository for session-log queries.
#[derive(Clone)]
pub struct SessionLogRepository {
	pool: SqlitePool,
}

impl SessionLogRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// List log entries recorded for the given actor IP, oldest first.
	#[tracing::instrument(skip(self))]
	pub async fn list_by_ip(&self, ip_address: &str) -> Result<Vec<SessionLogEntry>> {
		let rows: Vec<SessionLogRow> = sqlx::query_as(
			"SELECT id, ip_address, action, event_id, location, timestamp \
			 FROM session_logs WHERE ip_address = ? ORDER BY id",
		)
		.bind(ip_address)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().filter_map(SessionLogRow::into_entry).collect())
	}

	/// List log entries referencing the given event id, oldest first.
	///
	/// The reference is soft: entries may name an event that no longer
	/// exists.
	#[tracing::instrument(skip(self))]
	pub async fn list_by_event(&self, event_id: i64) -> Result<Vec<SessionLogEntry>> {
		let rows: Vec<SessionLogRow> = sqlx::query_as(
			"SELECT id, ip_address, action, event_id, location, timestamp \
			 FROM session_logs WHERE event_id = ? ORDER BY id",
		)
		.bind(event_id)
		.fetch_all(&self.pool)
		.await?;

		Ok(rows.into_iter().filter_map(SessionLogRow::into_entry).collect())
	}
}
