// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types.

use thiserror::Error;

/// Errors raised during server startup and maintenance paths.
#[derive(Debug, Error)]
pub enum ServerError {
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),
}
