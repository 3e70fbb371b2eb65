// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API response envelope helpers.
//!
//! Both key endpoints answer failures with the same envelope shape:
//! `status` is always `false`, `message` is the endpoint's fixed text, and
//! the optional `err` and `advice` fields carry the cause and a usage hint
//! respectively. Vault failures map coarsely: every read failure becomes
//! 404, every write failure becomes 400.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use keyhole_vault::VaultError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned by the key endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct KeyErrorResponse {
	/// Always `false` for errors.
	pub status: bool,

	/// Fixed human-readable message for this failure class.
	pub message: String,

	/// Underlying error, present on failed reads.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub err: Option<String>,

	/// Usage hint, present on failed writes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub advice: Option<String>,
}

impl KeyErrorResponse {
	fn message_only(message: &str) -> Self {
		Self {
			status: false,
			message: message.to_string(),
			err: None,
			advice: None,
		}
	}
}

/// 400 response for a failed input requirement.
pub fn validation_error(message: &str) -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(KeyErrorResponse::message_only(message)),
	)
		.into_response()
}

/// 404 response for a read that failed for any reason.
pub fn read_failure(error: &VaultError) -> Response {
	(
		StatusCode::NOT_FOUND,
		Json(KeyErrorResponse {
			status: false,
			message: "Key not found".to_string(),
			err: Some(error.to_string()),
			advice: None,
		}),
	)
		.into_response()
}

/// 400 response for a write that failed for any reason.
pub fn write_failure() -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(KeyErrorResponse {
			status: false,
			message: "Something went wrong".to_string(),
			err: None,
			advice: Some("Do not leave spaces between characters".to_string()),
		}),
	)
		.into_response()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_envelope_omits_optional_fields() {
		let envelope = KeyErrorResponse::message_only("The id is required");
		let json = serde_json::to_value(&envelope).unwrap();

		assert_eq!(json["status"], false);
		assert_eq!(json["message"], "The id is required");

		let object = json.as_object().unwrap();
		assert!(!object.contains_key("err"));
		assert!(!object.contains_key("advice"));
	}

	#[test]
	fn read_failure_is_not_found() {
		let response = read_failure(&VaultError::Transient("503 Service Unavailable".into()));
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn write_failure_is_bad_request() {
		let response = write_failure();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}
}
