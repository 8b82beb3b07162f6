// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
	pub status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthComponents {
	pub database: ComponentHealth,
	pub geoip: ComponentHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub components: HealthComponents,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System is healthy or degraded", body = HealthResponse),
        (status = 503, description = "System is unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Component health check.
///
/// A missing GeoIP database degrades the system but does not make it
/// unhealthy; location lookups fall back to fixed values.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
		Ok(_) => ComponentHealth {
			status: HealthStatus::Healthy,
			detail: None,
		},
		Err(e) => {
			tracing::error!(error = %e, "database health check failed");
			ComponentHealth {
				status: HealthStatus::Unhealthy,
				detail: Some(e.to_string()),
			}
		}
	};

	let geoip = if state.resolver.is_enabled() {
		ComponentHealth {
			status: HealthStatus::Healthy,
			detail: None,
		}
	} else {
		ComponentHealth {
			status: HealthStatus::Degraded,
			detail: Some("GeoIP database not configured".to_string()),
		}
	};

	let status = if database.status == HealthStatus::Unhealthy {
		HealthStatus::Unhealthy
	} else if geoip.status == HealthStatus::Degraded {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	};

	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		components: HealthComponents { database, geoip },
	};

	(http_status, Json(response))
}
