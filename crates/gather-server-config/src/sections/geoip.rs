// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GeoIP configuration section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeoIpConfigLayer {
	pub database_path: Option<String>,
}

impl GeoIpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.database_path.is_some() {
			self.database_path = other.database_path;
		}
	}

	pub fn finalize(self) -> Option<GeoIpConfig> {
		self
			.database_path
			.map(|database_path| GeoIpConfig { database_path })
	}
}

/// GeoIP configuration (runtime, fully resolved).
///
/// Absence of this section means the server runs without geolocation; all
/// lookups then degrade to their fixed fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoIpConfig {
	pub database_path: String,
}
