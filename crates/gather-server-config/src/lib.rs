// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Gather server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`GATHER_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use gather_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub geoip: Option<GeoIpConfig>,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`GATHER_SERVER_*`)
/// 2. Config file (`/etc/gather/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	Ok(finalize(merged))
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	Ok(finalize(merged))
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> ServerConfig {
	let http = layer.http.unwrap_or_default().finalize();
	let database = layer.database.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let geoip = layer.geoip.and_then(|l| l.finalize());

	info!(
		host = %http.host,
		port = http.port,
		database = %database.url,
		geoip_configured = geoip.is_some(),
		"Server configuration loaded"
	);

	ServerConfig {
		http,
		database,
		geoip,
		logging,
	}
}
