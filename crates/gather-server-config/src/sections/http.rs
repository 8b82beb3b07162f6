// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP server configuration.

use serde::Deserialize;

/// HTTP server configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
	pub base_url: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
			base_url: "http://localhost:8080".to_string(),
		}
	}
}

/// HTTP configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub base_url: Option<String>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		let port = self.port.unwrap_or(8080);
		HttpConfig {
			host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
			port,
			base_url: self
				.base_url
				.unwrap_or_else(|| format!("http://localhost:{}", port)),
		}
	}
}
