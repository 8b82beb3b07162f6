// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event orchestration for the Gather server.
//!
//! [`EventService`] enforces the one nontrivial policy in the system: an
//! event may only be modified or deleted by the IP address that created it,
//! compared by exact string equality. Every mutation also records one
//! session-log entry.

pub mod error;
pub mod service;

pub use error::{EventServiceError, Result};
pub use service::EventService;
