// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod events;

pub use events::{
	CreateEventRequest, DeleteEventResponse, EventErrorResponse, EventResponse, LocationResponse,
	RangeQuery, TimezoneResponse, UpdateEventRequest,
};
