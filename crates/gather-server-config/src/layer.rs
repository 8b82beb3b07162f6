// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources.

use serde::Deserialize;

use crate::sections::{
	DatabaseConfigLayer, GeoIpConfigLayer, HttpConfigLayer, LoggingConfigLayer,
};

/// A partial server configuration as produced by one source.
///
/// Sections absent from a source leave the accumulated value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub geoip: Option<GeoIpConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge a higher-precedence layer into this one.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.database, other.database, DatabaseConfigLayer::merge);
		merge_section(&mut self.geoip, other.geoip, GeoIpConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(base), Some(other)) => merge(base, other),
		(None, Some(other)) => *base = Some(other),
		_ => {}
	}
}
