// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core domain types for the Gather event-booking backend.
//!
//! An [`Event`] is owned by the IP address that created it; every mutating
//! operation on an event is mirrored by an append-only [`SessionLogEntry`].

pub mod error;
pub mod event;
pub mod session_log;

pub use error::EventsError;
pub use event::{Event, EventDraft};
pub use session_log::{SessionAction, SessionLogEntry};
