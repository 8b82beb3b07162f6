// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API response helpers.
//!
//! This module provides common response patterns for HTTP handlers:
//! - Error response helpers (not_found, internal_error)
//! - Trait implementation macro for error response types (impl_api_error_response!)

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Trait for API error response types that have `error` and `message` fields.
pub trait ApiErrorResponse: Serialize + Send {
	fn new(error: impl Into<String>, message: impl Into<String>) -> Self;
}

/// Implement `ApiErrorResponse` for a struct with `error` and `message` fields.
///
/// # Example
///
/// ```ignore
/// impl_api_error_response!(EventErrorResponse);
/// ```
#[macro_export]
macro_rules! impl_api_error_response {
	($ty:ty) => {
		impl $crate::api_response::ApiErrorResponse for $ty {
			fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
				Self {
					error: error.into(),
					message: message.into(),
				}
			}
		}
	};
}

/// Create a 404 Not Found response.
pub fn not_found<T: ApiErrorResponse>(message: impl Into<String>) -> (StatusCode, Json<T>) {
	(StatusCode::NOT_FOUND, Json(T::new("not_found", message)))
}

/// Create a 500 Internal Server Error response.
pub fn internal_error<T: ApiErrorResponse>(message: impl Into<String>) -> (StatusCode, Json<T>) {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(T::new("internal_error", message)),
	)
}
