// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event repository for database operations.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::sqlite::SqlitePool;

use gather_events_core::{Event, EventDraft};

use crate::error::{DbError, Result};

/// Wall-clock times are stored as ISO-8601 naive strings so that SQLite's
/// lexicographic comparison orders them chronologically.
fn format_naive(t: &NaiveDateTime) -> String {
	t.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn parse_naive(s: &str) -> Result<NaiveDateTime> {
	s.parse()
		.map_err(|_| DbError::Internal(format!("invalid wall-clock timestamp in row: {s}")))
}

fn parse_utc(s: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(s)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|_| DbError::Internal(format!("invalid UTC timestamp in row: {s}")))
}

#[derive(sqlx::FromRow)]
struct EventRow {
	id: i64,
	title: String,
	description: Option<String>,
	start_time: String,
	end_time: String,
	location: Option<String>,
	timezone: Option<String>,
	created_by: String,
	created_at: String,
	updated_at: Option<String>,
}

impl EventRow {
	fn into_event(self) -> Result<Event> {
		Ok(Event {
			id: self.id,
			title: self.title,
			description: self.description,
			start_time: parse_naive(&self.start_time)?,
			end_time: parse_naive(&self.end_time)?,
			location: self.location,
			timezone: self.timezone,
			created_by: self.created_by,
			created_at: parse_utc(&self.created_at)?,
			updated_at: self
				.updated_at
				.as_deref()
				.map(parse_utc)
				.transpose()?,
		})
	}
}

const EVENT_COLUMNS: &str = "id, title, description, start_time, end_time, location, timezone, \
	 created_by, created_at, updated_at";

/// Repository for event database operations.
#[derive(Clone)]
pub struct EventRepository {
	pool: SqlitePool,
}

impl EventRepository {
	/// Create a new repository from an existing pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a new event, returning the stored row.
	///
	/// `created_by` and `created_at` are fixed here and are never touched by
	/// any later operation.
	#[tracing::instrument(skip(self, draft), fields(created_by = %created_by))]
	pub async fn insert(
		&self,
		draft: &EventDraft,
		created_by: &str,
		created_at: DateTime<Utc>,
	) -> Result<Event> {
		let result = sqlx::query(
			r#"
			INSERT INTO events (
				title, description, start_time, end_time,
				location, timezone, created_by, created_at
			) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&draft.title)
		.bind(&draft.description)
		.bind(format_naive(&draft.start_time))
		.bind(format_naive(&draft.end_time))
		.bind(&draft.location)
		.bind(&draft.timezone)
		.bind(created_by)
		.bind(created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		let id = result.last_insert_rowid();
		tracing::debug!(event_id = id, "event inserted");

		self
			.get(id)
			.await?
			.ok_or_else(|| DbError::Internal("event not found after insert".to_string()))
	}

	/// Get an event by id.
	pub async fn get(&self, id: i64) -> Result<Option<Event>> {
		let row: Option<EventRow> = sqlx::query_as(&format!(
			"SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
		))
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.map(EventRow::into_event).transpose()
	}

	/// List all events ordered by start time.
	pub async fn list_all(&self) -> Result<Vec<Event>> {
		let rows: Vec<EventRow> = sqlx::query_as(&format!(
			"SELECT {EVENT_COLUMNS} FROM events ORDER BY start_time, id"
		))
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(EventRow::into_event).collect()
	}

	/// List events created by the given IP address.
	#[tracing::instrument(skip(self))]
	pub async fn list_by_creator(&self, created_by: &str) -> Result<Vec<Event>> {
		let rows: Vec<EventRow> = sqlx::query_as(&format!(
			"SELECT {EVENT_COLUMNS} FROM events WHERE created_by = ? ORDER BY start_time, id"
		))
		.bind(created_by)
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(EventRow::into_event).collect()
	}

	/// List events whose start time lies in `[start, end]`, both ends
	/// inclusive.
	#[tracing::instrument(skip(self))]
	pub async fn list_by_start_range(
		&self,
		start: NaiveDateTime,
		end: NaiveDateTime,
	) -> Result<Vec<Event>> {
		let rows: Vec<EventRow> = sqlx::query_as(&format!(
			"SELECT {EVENT_COLUMNS} FROM events \
			 WHERE start_time >= ? AND start_time <= ? ORDER BY start_time, id"
		))
		.bind(format_naive(&start))
		.bind(format_naive(&end))
		.fetch_all(&self.pool)
		.await?;

		rows.into_iter().map(EventRow::into_event).collect()
	}

	/// Overwrite the caller-settable fields of an event.
	///
	/// The UPDATE statement deliberately omits `created_by` and `created_at`;
	/// there is no code path that rewrites them. Returns `None` when the id
	/// does not exist.
	#[tracing::instrument(skip(self, draft))]
	pub async fn update_fields(
		&self,
		id: i64,
		draft: &EventDraft,
		updated_at: DateTime<Utc>,
	) -> Result<Option<Event>> {
		let result = sqlx::query(
			r#"
			UPDATE events SET
				title = ?,
				description = ?,
				start_time = ?,
				end_time = ?,
				location = ?,
				timezone = ?,
				updated_at = ?
			WHERE id = ?
			"#,
		)
		.bind(&draft.title)
		.bind(&draft.description)
		.bind(format_naive(&draft.start_time))
		.bind(format_naive(&draft.end_time))
		.bind(&draft.location)
		.bind(&draft.timezone)
		.bind(updated_at.to_rfc3339())
		.bind(id)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Ok(None);
		}

		tracing::debug!(event_id = id, "event updated");
		self.get(id).await
	}

	/// Delete an event by id. Returns whether a row was removed.
	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: i64) -> Result<bool> {
		let result = sqlx::query("DELETE FROM events WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		if deleted {
			tracing::debug!(event_id = id, "event deleted");
		}
		Ok(deleted)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;

	fn naive(s: &str) -> NaiveDateTime {
		s.parse().unwrap()
	}

	fn draft(title: &str, start: &str, end: &str) -> EventDraft {
		EventDraft {
			title: title.to_string(),
			description: None,
			start_time: naive(start),
			end_time: naive(end),
			location: None,
			timezone: Some("UTC".to_string()),
		}
	}

	#[tokio::test]
	async fn test_insert_and_get_roundtrip() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		let created_at = Utc::now();
		let event = repo
			.insert(
				&draft("Launch", "2025-01-01T10:00:00", "2025-01-01T11:00:00"),
				"203.0.113.5",
				created_at,
			)
			.await
			.unwrap();

		assert_eq!(event.title, "Launch");
		assert_eq!(event.created_by, "203.0.113.5");
		assert_eq!(event.start_time, naive("2025-01-01T10:00:00"));
		assert!(event.updated_at.is_none());

		let fetched = repo.get(event.id).await.unwrap().unwrap();
		assert_eq!(fetched, event);
	}

	#[tokio::test]
	async fn test_get_absent_returns_none() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);
		assert!(repo.get(999).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_list_by_creator_filters() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		repo
			.insert(
				&draft("A", "2025-01-01T10:00:00", "2025-01-01T11:00:00"),
				"203.0.113.5",
				Utc::now(),
			)
			.await
			.unwrap();
		repo
			.insert(
				&draft("B", "2025-01-02T10:00:00", "2025-01-02T11:00:00"),
				"198.51.100.9",
				Utc::now(),
			)
			.await
			.unwrap();

		let mine = repo.list_by_creator("203.0.113.5").await.unwrap();
		assert_eq!(mine.len(), 1);
		assert_eq!(mine[0].title, "A");

		let all = repo.list_all().await.unwrap();
		assert_eq!(all.len(), 2);
	}

	#[tokio::test]
	async fn test_range_is_inclusive_at_both_ends() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		for (title, start) in [
			("before", "2025-01-01T09:59:59"),
			("at-start", "2025-01-01T10:00:00"),
			("inside", "2025-01-01T12:00:00"),
			("at-end", "2025-01-01T14:00:00"),
			("after", "2025-01-01T14:00:01"),
		] {
			repo
				.insert(
					&draft(title, start, "2025-01-01T15:00:00"),
					"203.0.113.5",
					Utc::now(),
				)
				.await
				.unwrap();
		}

		let hits = repo
			.list_by_start_range(naive("2025-01-01T10:00:00"), naive("2025-01-01T14:00:00"))
			.await
			.unwrap();
		let titles: Vec<&str> = hits.iter().map(|e| e.title.as_str()).collect();
		assert_eq!(titles, vec!["at-start", "inside", "at-end"]);
	}

	#[tokio::test]
	async fn test_update_preserves_creator_and_created_at() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		let created = repo
			.insert(
				&draft("Launch", "2025-01-01T10:00:00", "2025-01-01T11:00:00"),
				"203.0.113.5",
				Utc::now(),
			)
			.await
			.unwrap();

		let updated = repo
			.update_fields(
				created.id,
				&draft("Launch v2", "2025-01-01T12:00:00", "2025-01-01T13:00:00"),
				Utc::now(),
			)
			.await
			.unwrap()
			.unwrap();

		assert_eq!(updated.title, "Launch v2");
		assert_eq!(updated.created_by, created.created_by);
		assert_eq!(updated.created_at, created.created_at);
		assert!(updated.updated_at.is_some());
	}

	#[tokio::test]
	async fn test_update_absent_returns_none() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		let result = repo
			.update_fields(
				42,
				&draft("X", "2025-01-01T10:00:00", "2025-01-01T11:00:00"),
				Utc::now(),
			)
			.await
			.unwrap();
		assert!(result.is_none());
	}

	#[tokio::test]
	async fn test_delete() {
		let pool = create_test_pool().await;
		let repo = EventRepository::new(pool);

		let event = repo
			.insert(
				&draft("Launch", "2025-01-01T10:00:00", "2025-01-01T11:00:00"),
				"203.0.113.5",
				Utc::now(),
			)
			.await
			.unwrap();

		assert!(repo.delete(event.id).await.unwrap());
		assert!(repo.get(event.id).await.unwrap().is_none());
		assert!(!repo.delete(event.id).await.unwrap());
	}
}
