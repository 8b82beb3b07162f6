// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end tests for the events API.
//!
//! These drive the real router over an in-memory database and cover the
//! IP-ownership contract: reads are unrestricted, mutations require the
//! creating IP, and the failure shape differs by operation (404 on update,
//! 403 on delete).

mod support;

use axum::http::StatusCode;
use serde_json::json;
use tokio::time::{sleep, Duration};
use tower::ServiceExt;

use support::{body_json, request, test_app, DEFAULT_TEST_TIMEZONE};

const OWNER: &str = "203.0.113.5";
const STRANGER: &str = "198.51.100.9";

fn launch_body() -> serde_json::Value {
	json!({
		"title": "Launch",
		"start_time": "2025-01-01T10:00:00",
		"end_time": "2025-01-01T11:00:00"
	})
}

#[tokio::test]
async fn test_create_fills_timezone_and_owner_from_ip() {
	let (app, _pool) = test_app().await;

	let response = app
		.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::CREATED);
	let event = body_json(response).await;
	assert_eq!(event["title"], "Launch");
	assert_eq!(event["created_by"], OWNER);
	// No timezone was submitted; the server filled it from the caller's IP
	// (degraded here to the process default, but always non-empty).
	assert_eq!(event["timezone"], DEFAULT_TEST_TIMEZONE);
	assert!(event["updated_at"].is_null());
}

#[tokio::test]
async fn test_submitted_timezone_is_kept() {
	let (app, _pool) = test_app().await;

	let mut body = launch_body();
	body["timezone"] = json!("Europe/Berlin");
	let response = app
		.oneshot(request("POST", "/events", OWNER, Some(body)))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::CREATED);
	let event = body_json(response).await;
	assert_eq!(event["timezone"], "Europe/Berlin");
}

#[tokio::test]
async fn test_reads_are_unrestricted() {
	let (app, _pool) = test_app().await;

	let created = body_json(
		app.clone()
			.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
			.await
			.unwrap(),
	)
	.await;
	let id = created["id"].as_i64().unwrap();

	// A different caller can read the event and the full listing.
	let response = app
		.clone()
		.oneshot(request("GET", &format!("/events/{id}"), STRANGER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let response = app
		.oneshot(request("GET", "/events", STRANGER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let events = body_json(response).await;
	assert_eq!(events.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_absent_event_is_404() {
	let (app, _pool) = test_app().await;

	let response = app
		.oneshot(request("GET", "/events/999", OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let body = body_json(response).await;
	assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_update_requires_creator_ip() {
	let (app, _pool) = test_app().await;

	let created = body_json(
		app.clone()
			.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
			.await
			.unwrap(),
	)
	.await;
	let id = created["id"].as_i64().unwrap();

	let update = json!({
		"title": "Launch v2",
		"start_time": "2025-01-01T12:00:00",
		"end_time": "2025-01-01T13:00:00",
		"timezone": "Europe/Berlin"
	});

	// A stranger gets the same 404 an absent id would produce.
	let response = app
		.clone()
		.oneshot(request(
			"PUT",
			&format!("/events/{id}"),
			STRANGER,
			Some(update.clone()),
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let absent = app
		.clone()
		.oneshot(request("PUT", "/events/999", STRANGER, Some(update.clone())))
		.await
		.unwrap();
	assert_eq!(absent.status(), StatusCode::NOT_FOUND);

	// The owner succeeds; creation fields survive the update.
	let response = app
		.clone()
		.oneshot(request("PUT", &format!("/events/{id}"), OWNER, Some(update)))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let updated = body_json(response).await;
	assert_eq!(updated["title"], "Launch v2");
	assert_eq!(updated["created_by"], OWNER);
	assert_eq!(updated["created_at"], created["created_at"]);
	assert!(!updated["updated_at"].is_null());
}

#[tokio::test]
async fn test_delete_absent_and_mismatch_are_indistinguishable() {
	let (app, _pool) = test_app().await;

	let created = body_json(
		app.clone()
			.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
			.await
			.unwrap(),
	)
	.await;
	let id = created["id"].as_i64().unwrap();

	let mismatch = app
		.clone()
		.oneshot(request("DELETE", &format!("/events/{id}"), STRANGER, None))
		.await
		.unwrap();
	let absent = app
		.clone()
		.oneshot(request("DELETE", "/events/999", STRANGER, None))
		.await
		.unwrap();

	assert_eq!(mismatch.status(), StatusCode::FORBIDDEN);
	assert_eq!(absent.status(), StatusCode::FORBIDDEN);
	assert_eq!(body_json(mismatch).await, body_json(absent).await);

	// The owner's delete succeeds.
	let response = app
		.clone()
		.oneshot(request("DELETE", &format!("/events/{id}"), OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body, json!({"success": true}));

	let response = app
		.oneshot(request("GET", &format!("/events/{id}"), OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_listing_filters_by_caller_ip() {
	let (app, _pool) = test_app().await;

	app.clone()
		.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
		.await
		.unwrap();
	let mut other = launch_body();
	other["title"] = json!("Other");
	app.clone()
		.oneshot(request("POST", "/events", STRANGER, Some(other)))
		.await
		.unwrap();

	let response = app
		.oneshot(request("GET", "/events/user", OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let events = body_json(response).await;
	let events = events.as_array().unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0]["title"], "Launch");
}

#[tokio::test]
async fn test_range_listing_is_inclusive_at_both_ends() {
	let (app, _pool) = test_app().await;

	for (title, start) in [
		("before", "2025-01-01T09:59:59"),
		("at-start", "2025-01-01T10:00:00"),
		("at-end", "2025-01-01T14:00:00"),
		("after", "2025-01-01T14:00:01"),
	] {
		let body = json!({
			"title": title,
			"start_time": start,
			"end_time": "2025-01-01T15:00:00"
		});
		app.clone()
			.oneshot(request("POST", "/events", OWNER, Some(body)))
			.await
			.unwrap();
	}

	let response = app
		.oneshot(request(
			"GET",
			"/events/range?start=2025-01-01T10:00:00&end=2025-01-01T14:00:00",
			OWNER,
			None,
		))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let events = body_json(response).await;
	let titles: Vec<&str> = events
		.as_array()
		.unwrap()
		.iter()
		.map(|e| e["title"].as_str().unwrap())
		.collect();
	assert_eq!(titles, vec!["at-start", "at-end"]);
}

#[tokio::test]
async fn test_malformed_range_params_are_a_client_error() {
	let (app, _pool) = test_app().await;

	let response = app
		.oneshot(request(
			"GET",
			"/events/range?start=yesterday&end=tomorrow",
			OWNER,
			None,
		))
		.await
		.unwrap();
	assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
	let (app, _pool) = test_app().await;

	let response = app
		.oneshot(request(
			"POST",
			"/events",
			OWNER,
			Some(json!({"title": "no times"})),
		))
		.await
		.unwrap();
	assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_timezone_and_location_endpoints_degrade_gracefully() {
	let (app, _pool) = test_app().await;

	let response = app
		.clone()
		.oneshot(request("GET", "/events/timezone", OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["timezone"], DEFAULT_TEST_TIMEZONE);

	// No GeoIP database is loaded, so every location resolves to Unknown.
	let response = app
		.oneshot(request("GET", "/events/location", OWNER, None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["location"], "Unknown");
}

#[tokio::test]
async fn test_every_mutation_appends_one_session_log_row() {
	let (app, pool) = test_app().await;

	let created = body_json(
		app.clone()
			.oneshot(request("POST", "/events", OWNER, Some(launch_body())))
			.await
			.unwrap(),
	)
	.await;
	let id = created["id"].as_i64().unwrap();

	let update = json!({
		"title": "Launch v2",
		"start_time": "2025-01-01T12:00:00",
		"end_time": "2025-01-01T13:00:00"
	});
	app.clone()
		.oneshot(request("PUT", &format!("/events/{id}"), OWNER, Some(update)))
		.await
		.unwrap();
	app.clone()
		.oneshot(request("DELETE", &format!("/events/{id}"), OWNER, None))
		.await
		.unwrap();

	// A denied mutation must not add a row.
	app.clone()
		.oneshot(request("DELETE", &format!("/events/{id}"), STRANGER, None))
		.await
		.unwrap();

	// Session log writes are queued; give the pipeline a beat to drain.
	sleep(Duration::from_millis(100)).await;

	let rows: Vec<(String, String, Option<i64>)> =
		sqlx::query_as("SELECT ip_address, action, event_id FROM session_logs ORDER BY id")
			.fetch_all(&pool)
			.await
			.unwrap();

	assert_eq!(
		rows,
		vec![
			(OWNER.to_string(), "CREATE_EVENT".to_string(), Some(id)),
			(OWNER.to_string(), "UPDATE_EVENT".to_string(), Some(id)),
			(OWNER.to_string(), "DELETE_EVENT".to_string(), Some(id)),
		]
	);
}
