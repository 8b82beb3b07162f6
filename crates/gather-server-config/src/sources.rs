// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	DatabaseConfigLayer, GeoIpConfigLayer, HttpConfigLayer, LoggingConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/gather/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: GATHER_SERVER_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			database: Some(load_database_from_env()),
			geoip: Some(load_geoip_from_env()),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("GATHER_SERVER_HOST"),
		port: env_u16("GATHER_SERVER_PORT")?,
		base_url: env_var("GATHER_SERVER_BASE_URL"),
	})
}

fn load_database_from_env() -> DatabaseConfigLayer {
	DatabaseConfigLayer {
		url: env_var("GATHER_SERVER_DATABASE_URL"),
	}
}

fn load_geoip_from_env() -> GeoIpConfigLayer {
	GeoIpConfigLayer {
		database_path: env_var("GATHER_SERVER_GEOIP_DATABASE_PATH"),
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("GATHER_SERVER_LOG_LEVEL"),
	}
}
