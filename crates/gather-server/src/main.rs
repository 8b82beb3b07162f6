// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gather event booking server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gather_server::{create_app_state, create_router};
use gather_server_geoip::{GeoIpService, LocationResolver};

/// Gather server - HTTP server for event booking.
#[derive(Parser, Debug)]
#[command(name = "gather-server", about = "Gather event booking server", version)]
struct Args {
	/// Subcommands for gather-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("gather-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = gather_server_config::load_config()?;

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		geoip_configured = config.geoip.is_some(),
		"starting gather-server"
	);

	// Create database pool and run migrations
	let pool = gather_server::db::create_pool(&config.database.url).await?;
	gather_server::db::run_migrations(&pool).await?;

	// Open the GeoIP database if configured; a failure to open it degrades
	// location resolution rather than aborting startup.
	let geoip_service = config.geoip.as_ref().and_then(|geoip| {
		match GeoIpService::new(&geoip.database_path) {
			Ok(service) => Some(Arc::new(service)),
			Err(e) => {
				tracing::warn!(error = %e, "GeoIP database unavailable, location resolution degraded");
				None
			}
		}
	});
	let resolver = LocationResolver::new(geoip_service);

	let state = create_app_state(pool, resolver);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	// Start server
	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(
			listener,
			app.into_make_service_with_connect_info::<SocketAddr>(),
		) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
