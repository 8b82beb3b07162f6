// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session log pipeline.
//!
//! Every create/update/delete of an event produces one session-log record.
//! Records flow through a bounded queue into one or more sinks; a sink
//! failure is logged and swallowed, so a logging failure can never roll back
//! or fail the mutation that triggered it.

pub mod error;
pub mod record;
pub mod service;
pub mod sink;

pub use error::SessionLogSinkError;
pub use record::SessionLogRecord;
pub use service::SessionLogService;
pub use sink::{SessionLogSink, SqliteSessionLogSink, TracingSessionLogSink};
