// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check HTTP handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: String,
	pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Liveness check.
///
/// Reports process liveness only. Vault reachability is not probed here;
/// every vault round trip costs a token exchange.
pub async fn health_check() -> impl IntoResponse {
	(
		StatusCode::OK,
		Json(HealthResponse {
			status: "healthy".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
		}),
	)
}
