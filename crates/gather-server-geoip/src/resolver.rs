// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Never-failing location and timezone resolution.
//!
//! [`LocationResolver`] wraps an optional [`GeoIpService`] and recovers every
//! failure locally: a missing database, a loopback caller, a malformed
//! address, or a lookup miss all degrade to fixed fallback values. Callers
//! never see an error from this module.

use std::net::IpAddr;
use std::sync::Arc;

use crate::GeoIpService;

/// Location returned when the caller cannot be geolocated.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Location returned for loopback callers.
pub const LOCAL_LOCATION: &str = "Local";

/// Best-effort IP-to-location and IP-to-timezone resolution.
///
/// The GeoIP database handle is initialized once at process start and is
/// read-only thereafter; its absence is an explicit state checked on every
/// lookup.
#[derive(Debug, Clone)]
pub struct LocationResolver {
	service: Option<Arc<GeoIpService>>,
	default_timezone: String,
}

impl LocationResolver {
	/// Create a resolver over an already-opened GeoIP service, or over none.
	pub fn new(service: Option<Arc<GeoIpService>>) -> Self {
		Self {
			service,
			default_timezone: system_timezone(),
		}
	}

	/// Create a resolver from `GATHER_SERVER_GEOIP_DATABASE_PATH`.
	pub fn from_env() -> Self {
		Self::new(GeoIpService::try_from_env().map(Arc::new))
	}

	/// A resolver with no backing database; every lookup degrades.
	pub fn disabled() -> Self {
		Self::new(None)
	}

	/// Override the fallback timezone. Used by tests to pin the value.
	pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
		self.default_timezone = timezone.into();
		self
	}

	/// Whether a GeoIP database is loaded.
	pub fn is_enabled(&self) -> bool {
		self.service.is_some()
	}

	/// The timezone used whenever a caller-specific one cannot be resolved.
	pub fn default_timezone(&self) -> &str {
		&self.default_timezone
	}

	/// Resolve `ip_str` to a human-readable location.
	///
	/// Returns `"Unknown"` when the database is unavailable or the lookup
	/// fails in any way, and `"Local"` for loopback callers.
	#[tracing::instrument(level = "debug", skip(self))]
	pub fn resolve_location(&self, ip_str: &str) -> String {
		let Some(service) = &self.service else {
			return UNKNOWN_LOCATION.to_string();
		};

		let ip: IpAddr = match ip_str.parse() {
			Ok(ip) => ip,
			Err(_) => {
				tracing::debug!(ip = %ip_str, "invalid IP address for location lookup");
				return UNKNOWN_LOCATION.to_string();
			}
		};

		if ip.is_loopback() {
			return LOCAL_LOCATION.to_string();
		}

		match service.lookup(ip) {
			Ok(location) => location
				.display_string()
				.unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
			Err(e) => {
				tracing::debug!(ip = %ip_str, error = %e, "GeoIP location lookup failed");
				UNKNOWN_LOCATION.to_string()
			}
		}
	}

	/// Resolve `ip_str` to an IANA timezone identifier.
	///
	/// Falls back to the process's default timezone when the database is
	/// unavailable, the caller is loopback, or the lookup fails.
	#[tracing::instrument(level = "debug", skip(self))]
	pub fn resolve_timezone(&self, ip_str: &str) -> String {
		let Some(service) = &self.service else {
			return self.default_timezone.clone();
		};

		let ip: IpAddr = match ip_str.parse() {
			Ok(ip) => ip,
			Err(_) => {
				tracing::debug!(ip = %ip_str, "invalid IP address for timezone lookup");
				return self.default_timezone.clone();
			}
		};

		if ip.is_loopback() {
			return self.default_timezone.clone();
		}

		match service.lookup(ip) {
			Ok(location) => location
				.timezone
				.unwrap_or_else(|| self.default_timezone.clone()),
			Err(e) => {
				tracing::debug!(ip = %ip_str, error = %e, "GeoIP timezone lookup failed");
				self.default_timezone.clone()
			}
		}
	}
}

/// The process's IANA timezone name, detected once at resolver construction.
fn system_timezone() -> String {
	iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}
