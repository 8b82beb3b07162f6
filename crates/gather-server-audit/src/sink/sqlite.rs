// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::SessionLogSinkError;
use crate::record::SessionLogRecord;
use crate::sink::SessionLogSink;

/// Appends session-log records to the `session_logs` table.
pub struct SqliteSessionLogSink {
	pool: SqlitePool,
	name: String,
}

impl SqliteSessionLogSink {
	pub fn new(pool: SqlitePool) -> Self {
		Self {
			pool,
			name: "sqlite".to_string(),
		}
	}
}

#[async_trait]
impl SessionLogSink for SqliteSessionLogSink {
	fn name(&self) -> &str {
		&self.name
	}

	async fn publish(&self, record: Arc<SessionLogRecord>) -> Result<(), SessionLogSinkError> {
		sqlx::query(
			r#"
			INSERT INTO session_logs (ip_address, action, event_id, location, timestamp)
			VALUES (?, ?, ?, ?, ?)
			"#,
		)
		.bind(&record.ip_address)
		.bind(record.action.to_string())
		.bind(record.event_id)
		.bind(&record.location)
		.bind(record.timestamp.to_rfc3339())
		.execute(&self.pool)
		.await
		.map_err(|e| {
			if is_transient_error(&e) {
				SessionLogSinkError::Transient(format!("database error: {e}"))
			} else {
				SessionLogSinkError::Permanent(format!("database error: {e}"))
			}
		})?;

		Ok(())
	}
}

fn is_transient_error(e: &sqlx::Error) -> bool {
	match e {
		sqlx::Error::Io(_) => true,
		sqlx::Error::PoolTimedOut => true,
		sqlx::Error::PoolClosed => true,
		sqlx::Error::Database(db_err) => {
			let msg = db_err.message().to_lowercase();
			msg.contains("busy") || msg.contains("locked") || msg.contains("timeout")
		}
		_ => false,
	}
}
