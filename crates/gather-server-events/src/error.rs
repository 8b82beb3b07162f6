// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the event service.

use thiserror::Error;

use gather_server_db::DbError;

/// Errors from event service operations.
///
/// `NotFound` and `Unauthorized` are distinct at this layer; the HTTP
/// boundary collapses them where the external contract requires it.
#[derive(Debug, Error)]
pub enum EventServiceError {
	#[error("database error: {0}")]
	Database(#[from] DbError),

	#[error("event not found: {0}")]
	NotFound(i64),

	#[error("caller does not own event {0}")]
	Unauthorized(i64),
}

/// Result type for event service operations.
pub type Result<T> = std::result::Result<T, EventServiceError>;
