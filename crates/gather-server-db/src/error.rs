// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Internal: {0}")]
	Internal(String),
}

pub type Result<T> = std::result::Result<T, DbError>;
