// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Key read and write routes backed by the vault.
//!
//! Endpoints:
//! - `GET /show-key-by-id?id={name}` - Fetch the latest version of a secret
//! - `POST /create-key` - Store a secret value under a name

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use keyhole_vault::SecretBundle;

use crate::api::AppState;
use crate::api_response::{self, KeyErrorResponse};
use crate::validation::{CreateKeyRequest, RequireKeyPayload, RequireSecretId};

/// Version argument that addresses the latest version of a secret.
const LATEST_VERSION: &str = "";

/// Successful response for `GET /show-key-by-id`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShowKeyResponse {
	/// Always `true` on success.
	pub status: bool,

	/// The secret as returned by the vault.
	pub data: SecretBundle,
}

/// Successful response for `POST /create-key`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateKeyResponse {
	/// Always `true` on success.
	pub status: bool,

	/// The stored secret as reported back by the vault.
	pub result: SecretBundle,
}

#[utoipa::path(
    get,
    path = "/show-key-by-id",
    params(
        ("id" = Option<String>, Query, description = "Name of the secret to fetch")
    ),
    responses(
        (status = 200, description = "Secret retrieved successfully", body = ShowKeyResponse),
        (status = 400, description = "The id query parameter is missing or empty", body = KeyErrorResponse),
        (status = 404, description = "The secret could not be fetched", body = KeyErrorResponse)
    ),
    tag = "keys"
)]
/// GET /show-key-by-id - Fetch the latest version of a secret.
#[instrument(skip(state), fields(id = %id))]
pub async fn show_key_by_id(
	State(state): State<AppState>,
	RequireSecretId(id): RequireSecretId,
) -> impl IntoResponse {
	match state.vault.get_secret(&id, LATEST_VERSION).await {
		Ok(bundle) => (
			StatusCode::OK,
			Json(ShowKeyResponse {
				status: true,
				data: bundle,
			}),
		)
			.into_response(),
		Err(e) => {
			warn!(error = %e, "Failed to fetch secret from vault");
			api_response::read_failure(&e)
		}
	}
}

#[utoipa::path(
    post,
    path = "/create-key",
    request_body = CreateKeyRequest,
    responses(
        (status = 200, description = "Secret stored successfully", body = CreateKeyResponse),
        (status = 400, description = "Required fields are missing, or the vault refused the write", body = KeyErrorResponse)
    ),
    tag = "keys"
)]
/// POST /create-key - Store a secret value under a name.
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_key(
	State(state): State<AppState>,
	payload: RequireKeyPayload,
) -> impl IntoResponse {
	match state.vault.set_secret(&payload.name, &payload.value).await {
		Ok(bundle) => {
			info!(name = %payload.name, "Secret stored in vault");
			(
				StatusCode::OK,
				Json(CreateKeyResponse {
					status: true,
					result: bundle,
				}),
			)
				.into_response()
		}
		Err(e) => {
			warn!(error = %e, "Failed to store secret in vault");
			api_response::write_failure()
		}
	}
}
