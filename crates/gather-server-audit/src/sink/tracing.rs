// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SessionLogSinkError;
use crate::record::SessionLogRecord;
use crate::sink::SessionLogSink;

/// Emits one structured log line per session-log record.
pub struct TracingSessionLogSink {
	name: String,
}

impl TracingSessionLogSink {
	pub fn new() -> Self {
		Self {
			name: "tracing".to_string(),
		}
	}
}

impl Default for TracingSessionLogSink {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SessionLogSink for TracingSessionLogSink {
	fn name(&self) -> &str {
		&self.name
	}

	async fn publish(&self, record: Arc<SessionLogRecord>) -> Result<(), SessionLogSinkError> {
		tracing::info!(
			target: "gather::session_log",
			ip = %record.ip_address,
			action = %record.action,
			event_id = ?record.event_id,
			location = ?record.location,
			timestamp = %record.timestamp.to_rfc3339(),
			"session log"
		);
		Ok(())
	}
}
