// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test helpers for database-backed tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Create an in-memory SQLite pool with the server schema applied.
///
/// The pool is limited to a single connection: each `:memory:` connection is
/// its own database, so sharing state requires sharing the connection.
pub async fn create_test_pool() -> SqlitePool {
	let options = SqliteConnectOptions::from_str(":memory:")
		.expect("valid in-memory options")
		.create_if_missing(true);

	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(options)
		.await
		.expect("Failed to create test pool");

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS events (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			title TEXT NOT NULL,
			description TEXT,
			start_time TEXT NOT NULL,
			end_time TEXT NOT NULL,
			location TEXT,
			timezone TEXT,
			created_by TEXT NOT NULL,
			created_at TEXT NOT NULL,
			updated_at TEXT
		)
		"#,
	)
	.execute(&pool)
	.await
	.expect("create events table");

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS session_logs (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			ip_address TEXT NOT NULL,
			action TEXT NOT NULL,
			event_id INTEGER,
			location TEXT,
			timestamp TEXT NOT NULL
		)
		"#,
	)
	.execute(&pool)
	.await
	.expect("create session_logs table");

	pool
}
