// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::SendError};
use tracing::{instrument, warn};

use gather_events_core::SessionAction;

use crate::record::SessionLogRecord;
use crate::sink::SessionLogSink;

/// Fire-and-forget session-log writer.
///
/// Records are queued onto a bounded channel and fanned out to sinks by a
/// background task. Enqueueing never blocks the caller and never fails the
/// triggering mutation: a full queue drops the record with a warning.
pub struct SessionLogService {
	tx: mpsc::Sender<SessionLogRecord>,
}

impl SessionLogService {
	pub fn new(queue_capacity: usize, sinks: Vec<Arc<dyn SessionLogSink>>) -> Self {
		let (tx, rx) = mpsc::channel(queue_capacity);

		tokio::spawn(Self::background_task(rx, sinks));

		Self { tx }
	}

	// Records are published sequentially so the persisted log preserves
	// append order; a failing sink is logged and skipped.
	async fn background_task(
		mut rx: mpsc::Receiver<SessionLogRecord>,
		sinks: Vec<Arc<dyn SessionLogSink>>,
	) {
		while let Some(record) = rx.recv().await {
			let record = Arc::new(record);

			for sink in &sinks {
				if let Err(e) = sink.publish(Arc::clone(&record)).await {
					warn!(sink = sink.name(), error = %e, "session log sink publish failed");
				}
			}
		}
	}

	/// Queue a session-log record for publication.
	///
	/// Returns `true` if the record was queued, `false` if it was dropped
	/// because the queue is full.
	#[instrument(skip(self, location), fields(action = %action))]
	pub fn record(
		&self,
		ip: &str,
		action: SessionAction,
		event_id: Option<i64>,
		location: impl Into<String>,
	) -> bool {
		let record = SessionLogRecord::new(ip, action, event_id, location);
		let queued = self.tx.try_send(record).is_ok();
		if !queued {
			warn!(ip = %ip, action = %action, "session log queue full, record dropped");
		}
		queued
	}

	/// Queue a record, waiting for queue admission.
	pub async fn record_blocking(
		&self,
		ip: &str,
		action: SessionAction,
		event_id: Option<i64>,
		location: impl Into<String>,
	) -> Result<(), SendError<SessionLogRecord>> {
		self
			.tx
			.send(SessionLogRecord::new(ip, action, event_id, location))
			.await
	}
}
