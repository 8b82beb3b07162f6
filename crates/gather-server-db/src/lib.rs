// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite persistence for the Gather server.
//!
//! Two tables: `events` (the booking records) and `session_logs` (the
//! append-only audit trail). Repositories map rows through `sqlx::FromRow`
//! structs with string timestamps, converted at the edge.

pub mod error;
pub mod event;
pub mod pool;
pub mod session_log;
pub mod testing;

pub use error::{DbError, Result};
pub use event::EventRepository;
pub use pool::create_pool;
pub use session_log::SessionLogRepository;
