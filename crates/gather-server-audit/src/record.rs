// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The pre-insert form of a session-log row.

use chrono::{DateTime, Utc};
use gather_events_core::SessionAction;

/// A session-log record awaiting publication.
///
/// This is a [`gather_events_core::SessionLogEntry`] without the
/// server-assigned id, stamped with the wall clock at enqueue time.
#[derive(Debug, Clone)]
pub struct SessionLogRecord {
	pub ip_address: String,
	pub action: SessionAction,
	pub event_id: Option<i64>,
	pub location: Option<String>,
	pub timestamp: DateTime<Utc>,
}

impl SessionLogRecord {
	pub fn new(
		ip_address: impl Into<String>,
		action: SessionAction,
		event_id: Option<i64>,
		location: impl Into<String>,
	) -> Self {
		Self {
			ip_address: ip_address.into(),
			action,
			event_id,
			location: Some(location.into()),
			timestamp: Utc::now(),
		}
	}
}
