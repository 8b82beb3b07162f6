// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GeoIP lookup service for Gather.
//!
//! This crate provides IP-to-location and IP-to-timezone lookups using MaxMind
//! GeoLite2 databases. The database path is configured via the
//! `GATHER_SERVER_GEOIP_DATABASE_PATH` environment variable or the `[geoip]`
//! config section.
//!
//! [`GeoIpService`] is the fallible reader wrapper; [`LocationResolver`] is the
//! never-failing facade the rest of the system talks to.
//!
//! # Usage
//!
//! ```ignore
//! use gather_server_geoip::LocationResolver;
//!
//! let resolver = LocationResolver::from_env();
//! let location = resolver.resolve_location("203.0.113.5");
//! let timezone = resolver.resolve_timezone("203.0.113.5");
//! ```

pub mod resolver;

pub use resolver::{LocationResolver, LOCAL_LOCATION, UNKNOWN_LOCATION};

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use maxminddb::{geoip2, Reader};
use serde::Serialize;

pub const GEOIP_DATABASE_PATH_ENV: &str = "GATHER_SERVER_GEOIP_DATABASE_PATH";

#[derive(Debug, thiserror::Error)]
pub enum GeoIpError {
	#[error("GeoIP database not configured (set {GEOIP_DATABASE_PATH_ENV})")]
	NotConfigured,

	#[error("GeoIP database not found at path: {0}")]
	DatabaseNotFound(String),

	#[error("Failed to open GeoIP database: {0}")]
	DatabaseOpen(#[source] maxminddb::MaxMindDBError),

	#[error("Failed to lookup IP address: {0}")]
	Lookup(#[source] maxminddb::MaxMindDBError),
}

pub type Result<T> = std::result::Result<T, GeoIpError>;

/// A resolved geolocation record.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GeoLocation {
	pub city: Option<String>,
	pub country: Option<String>,
	pub timezone: Option<String>,
}

impl GeoLocation {
	/// Human-readable location string.
	///
	/// `"<city>, <country>"` when both are known, `"<country>"` when only the
	/// country is known, `None` otherwise. A city without a country is not
	/// displayable on its own.
	pub fn display_string(&self) -> Option<String> {
		match (&self.city, &self.country) {
			(Some(city), Some(country)) => Some(format!("{city}, {country}")),
			(None, Some(country)) => Some(country.clone()),
			_ => None,
		}
	}
}

/// Wrapper around a MaxMind GeoLite2-City database reader.
pub struct GeoIpService {
	reader: Arc<Reader<Vec<u8>>>,
	database_path: String,
}

impl std::fmt::Debug for GeoIpService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeoIpService")
			.field("database_path", &self.database_path)
			.finish()
	}
}

impl GeoIpService {
	#[tracing::instrument(level = "info", skip(database_path), fields(path))]
	pub fn new<P: AsRef<Path>>(database_path: P) -> Result<Self> {
		let path = database_path.as_ref();
		let path_str = path.display().to_string();
		tracing::Span::current().record("path", &path_str);

		if !path.exists() {
			return Err(GeoIpError::DatabaseNotFound(path_str));
		}

		let reader = Reader::open_readfile(path).map_err(GeoIpError::DatabaseOpen)?;

		tracing::info!("GeoIP database loaded");

		Ok(Self {
			reader: Arc::new(reader),
			database_path: path_str,
		})
	}

	#[tracing::instrument(level = "debug")]
	pub fn from_env() -> Result<Self> {
		let path = std::env::var(GEOIP_DATABASE_PATH_ENV).map_err(|_| GeoIpError::NotConfigured)?;

		if path.is_empty() {
			return Err(GeoIpError::NotConfigured);
		}

		Self::new(&path)
	}

	/// Like [`GeoIpService::from_env`], but degrades to `None` instead of
	/// failing. A missing database is a capability degradation, not an error.
	pub fn try_from_env() -> Option<Self> {
		match Self::from_env() {
			Ok(service) => Some(service),
			Err(e) => {
				tracing::debug!(error = %e, "GeoIP service not available");
				None
			}
		}
	}

	#[tracing::instrument(level = "trace", skip(self), fields(ip = %ip))]
	pub fn lookup(&self, ip: IpAddr) -> Result<GeoLocation> {
		let city: geoip2::City = self.reader.lookup(ip).map_err(GeoIpError::Lookup)?;

		let location = GeoLocation {
			city: city
				.city
				.and_then(|c| c.names)
				.and_then(|n| n.get("en").copied())
				.map(String::from),
			country: city
				.country
				.as_ref()
				.and_then(|c| c.names.as_ref())
				.and_then(|n| n.get("en").copied())
				.map(String::from),
			timezone: city
				.location
				.as_ref()
				.and_then(|l| l.time_zone)
				.map(String::from),
		};

		Ok(location)
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn test_geo_location_display_does_not_panic(
			city in proptest::option::of("[a-zA-Z ]{1,50}"),
			country in proptest::option::of("[a-zA-Z ]{1,50}"),
			timezone in proptest::option::of("[a-zA-Z/_]{1,40}")
		) {
			let loc = GeoLocation {
				city,
				country,
				timezone,
			};
			let _ = loc.display_string();
		}

		/// Property: when both city and country are present the display
		/// string contains both, in order.
		#[test]
		fn test_geo_location_city_country_display(
			city in "[a-zA-Z ]{1,30}",
			country in "[a-zA-Z ]{1,30}",
		) {
			let loc = GeoLocation {
				city: Some(city.clone()),
				country: Some(country.clone()),
				timezone: None,
			};
			let display = loc.display_string().unwrap();
			prop_assert_eq!(display, format!("{}, {}", city, country));
		}

		/// Property: without a country there is never a display string.
		#[test]
		fn test_geo_location_no_country_no_display(
			city in proptest::option::of("[a-zA-Z ]{1,30}")
		) {
			let loc = GeoLocation {
				city,
				country: None,
				timezone: None,
			};
			prop_assert!(loc.display_string().is_none());
		}
	}
}
