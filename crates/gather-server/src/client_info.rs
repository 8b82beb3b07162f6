// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client IP extraction.
//!
//! The caller's IP address is the system's sole identity token, so its
//! extraction is kept behind this one boundary: everything else in the
//! system only ever sees the resulting string.

use std::net::SocketAddr;

use axum::http::HeaderMap;

/// Extract the client IP for a request.
///
/// Prefers proxy-supplied headers and falls back to the socket peer address
/// when none are present (direct connections, local development).
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
	extract_client_ip(headers).unwrap_or_else(|| peer.ip().to_string())
}

/// Extract client IP from request headers.
///
/// Checks headers in order of preference:
/// 1. `X-Forwarded-For` (first IP in chain, for reverse proxies)
/// 2. `X-Real-IP` (nginx style)
/// 3. `CF-Connecting-IP` (Cloudflare)
fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
	if let Some(xff) = headers.get("x-forwarded-for") {
		if let Ok(xff_str) = xff.to_str() {
			if let Some(first_ip) = xff_str.split(',').next() {
				let ip = first_ip.trim();
				if !ip.is_empty() {
					return Some(ip.to_string());
				}
			}
		}
	}

	if let Some(real_ip) = headers.get("x-real-ip") {
		if let Ok(ip) = real_ip.to_str() {
			let ip = ip.trim();
			if !ip.is_empty() {
				return Some(ip.to_string());
			}
		}
	}

	if let Some(cf_ip) = headers.get("cf-connecting-ip") {
		if let Ok(ip) = cf_ip.to_str() {
			let ip = ip.trim();
			if !ip.is_empty() {
				return Some(ip.to_string());
			}
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;

	fn peer() -> SocketAddr {
		"192.0.2.10:54321".parse().unwrap()
	}

	#[test]
	fn test_extract_client_ip_xff() {
		let mut headers = HeaderMap::new();
		headers.insert(
			"x-forwarded-for",
			"203.0.113.195, 70.41.3.18".parse().unwrap(),
		);
		assert_eq!(
			extract_client_ip(&headers),
			Some("203.0.113.195".to_string())
		);
	}

	#[test]
	fn test_extract_client_ip_real_ip() {
		let mut headers = HeaderMap::new();
		headers.insert("x-real-ip", "198.51.100.178".parse().unwrap());
		assert_eq!(
			extract_client_ip(&headers),
			Some("198.51.100.178".to_string())
		);
	}

	#[test]
	fn test_extract_client_ip_cf() {
		let mut headers = HeaderMap::new();
		headers.insert("cf-connecting-ip", "192.0.2.1".parse().unwrap());
		assert_eq!(extract_client_ip(&headers), Some("192.0.2.1".to_string()));
	}

	#[test]
	fn test_extract_client_ip_precedence() {
		let mut headers = HeaderMap::new();
		headers.insert("x-forwarded-for", "1.1.1.1".parse().unwrap());
		headers.insert("x-real-ip", "2.2.2.2".parse().unwrap());
		headers.insert("cf-connecting-ip", "3.3.3.3".parse().unwrap());
		assert_eq!(extract_client_ip(&headers), Some("1.1.1.1".to_string()));
	}

	#[test]
	fn test_client_ip_falls_back_to_peer() {
		let headers = HeaderMap::new();
		assert_eq!(client_ip(&headers, peer()), "192.0.2.10");
	}

	#[test]
	fn test_client_ip_prefers_headers_over_peer() {
		let mut headers = HeaderMap::new();
		headers.insert("x-forwarded-for", "203.0.113.5".parse().unwrap());
		assert_eq!(client_ip(&headers, peer()), "203.0.113.5");
	}

	#[test]
	fn test_empty_header_falls_through() {
		let mut headers = HeaderMap::new();
		headers.insert("x-forwarded-for", "".parse().unwrap());
		headers.insert("x-real-ip", "198.51.100.178".parse().unwrap());
		assert_eq!(
			extract_client_ip(&headers),
			Some("198.51.100.178".to_string())
		);
	}
}
