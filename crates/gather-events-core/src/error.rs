// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the core event model.

use thiserror::Error;

/// Errors that can occur when working with core event types.
#[derive(Debug, Error)]
pub enum EventsError {
	/// A stored session action string does not name a known action.
	#[error("invalid session action: {0}")]
	InvalidAction(String),
}
