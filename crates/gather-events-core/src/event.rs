// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event types for the booking backend.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable event.
///
/// `created_by` is the opaque owner token: the IP address observed when the
/// event was created. It is set exactly once and never altered by any later
/// operation. `start_time`/`end_time` are wall-clock times interpreted in
/// `timezone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub start_time: NaiveDateTime,
	pub end_time: NaiveDateTime,
	/// Free-text venue, unrelated to the creator's resolved location.
	pub location: Option<String>,
	/// IANA timezone identifier.
	pub timezone: Option<String>,
	pub created_by: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
	/// Whether `ip` owns this event.
	///
	/// Ownership is exact string equality against the stored creator IP.
	/// No subnet, proxy, or canonicalization logic is applied.
	#[must_use]
	pub fn is_owned_by(&self, ip: &str) -> bool {
		self.created_by == ip
	}
}

/// The caller-settable fields of an event, used for create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
	pub title: String,
	pub description: Option<String>,
	pub start_time: NaiveDateTime,
	pub end_time: NaiveDateTime,
	pub location: Option<String>,
	pub timezone: Option<String>,
}
