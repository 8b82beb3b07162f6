// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sink error types.

use thiserror::Error;

/// Errors a session-log sink can report when publishing a record.
///
/// The distinction is informational only: the pipeline logs both kinds and
/// continues either way.
#[derive(Debug, Error)]
pub enum SessionLogSinkError {
	/// The sink may succeed if the record were retried (I/O, lock contention).
	#[error("transient sink error: {0}")]
	Transient(String),

	/// The record can never be published by this sink.
	#[error("permanent sink error: {0}")]
	Permanent(String),
}
