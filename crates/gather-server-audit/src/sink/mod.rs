// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session-log sinks.

pub mod sqlite;
pub mod tracing;

pub use sqlite::SqliteSessionLogSink;
pub use tracing::TracingSessionLogSink;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SessionLogSinkError;
use crate::record::SessionLogRecord;

/// Destination for session-log records.
#[async_trait]
pub trait SessionLogSink: Send + Sync {
	fn name(&self) -> &str;

	async fn publish(&self, record: Arc<SessionLogRecord>) -> Result<(), SessionLogSinkError>;
}
