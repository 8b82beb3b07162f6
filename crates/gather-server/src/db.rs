// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SQLite database operations for the Gather server.
//!
//! This module re-exports repositories from gather-server-db and provides
//! server-specific migrations.

use sqlx::sqlite::SqlitePool;

use crate::error::ServerError;

pub use gather_server_db::{create_pool, DbError, EventRepository, SessionLogRepository};

/// Run all database migrations (001-002).
///
/// # Arguments
/// * `pool` - SQLite connection pool
///
/// # Errors
/// Returns `ServerError::Database` if migrations fail.
///
/// # Note
/// Migrations are idempotent - safe to run multiple times.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), ServerError> {
	let m1 = include_str!("../migrations/001_create_events.sql");
	for stmt in m1.split(';').filter(|s| !s.trim().is_empty()) {
		if let Err(e) = sqlx::query(stmt).execute(pool).await {
			let msg = e.to_string();
			if !msg.contains("already exists") && !msg.contains("duplicate column") {
				return Err(e.into());
			}
		}
	}

	let m2 = include_str!("../migrations/002_create_session_logs.sql");
	for stmt in m2.split(';').filter(|s| !s.trim().is_empty()) {
		if let Err(e) = sqlx::query(stmt).execute(pool).await {
			let msg = e.to_string();
			if !msg.contains("already exists") && !msg.contains("duplicate column") {
				return Err(e.into());
			}
		}
	}

	tracing::debug!("database migrations applied");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
	use std::str::FromStr;

	async fn bare_pool() -> SqlitePool {
		let options = SqliteConnectOptions::from_str(":memory:")
			.unwrap()
			.create_if_missing(true);
		SqlitePoolOptions::new()
			.max_connections(1)
			.connect_with(options)
			.await
			.unwrap()
	}

	#[tokio::test]
	async fn test_migrations_create_both_tables() {
		let pool = bare_pool().await;
		run_migrations(&pool).await.unwrap();

		sqlx::query("SELECT id FROM events").fetch_all(&pool).await.unwrap();
		sqlx::query("SELECT id FROM session_logs")
			.fetch_all(&pool)
			.await
			.unwrap();
	}

	#[tokio::test]
	async fn test_migrations_are_idempotent() {
		let pool = bare_pool().await;
		run_migrations(&pool).await.unwrap();
		run_migrations(&pool).await.unwrap();
	}
}
