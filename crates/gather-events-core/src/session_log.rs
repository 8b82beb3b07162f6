// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session log types.
//!
//! The session log is the audit trail of mutating actions. It is append-only:
//! no update or delete operation exists for these records anywhere in the
//! system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EventsError;

/// The kind of mutating action recorded in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionAction {
	CreateEvent,
	UpdateEvent,
	DeleteEvent,
}

impl std::fmt::Display for SessionAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SessionAction::CreateEvent => write!(f, "CREATE_EVENT"),
			SessionAction::UpdateEvent => write!(f, "UPDATE_EVENT"),
			SessionAction::DeleteEvent => write!(f, "DELETE_EVENT"),
		}
	}
}

impl std::str::FromStr for SessionAction {
	type Err = EventsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"CREATE_EVENT" => Ok(SessionAction::CreateEvent),
			"UPDATE_EVENT" => Ok(SessionAction::UpdateEvent),
			"DELETE_EVENT" => Ok(SessionAction::DeleteEvent),
			_ => Err(EventsError::InvalidAction(s.to_string())),
		}
	}
}

/// One persisted session-log row.
///
/// `event_id` is a soft reference: it is recorded even for deletions and may
/// name an event that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLogEntry {
	pub id: i64,
	pub ip_address: String,
	pub action: SessionAction,
	pub event_id: Option<i64>,
	/// Resolved location of the actor at the time of the action.
	pub location: Option<String>,
	pub timestamp: DateTime<Utc>,
}
