// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request validation extractors for the key endpoints.
//!
//! Presence is the only requirement enforced here: values pass through to
//! the vault untouched, empty strings count as missing, and unknown extra
//! fields are ignored. A failed extraction rejects with the endpoint's
//! 400 envelope.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api_response;

const ID_REQUIRED: &str = "The id is required";
const NAME_AND_VALUE_REQUIRED: &str = "The name and value are required";

/// Query parameters accepted by `GET /show-key-by-id`.
#[derive(Debug, Deserialize)]
pub struct ShowKeyParams {
	pub id: Option<String>,
}

/// JSON body accepted by `POST /create-key`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateKeyRequest {
	/// Name to store the secret under.
	pub name: Option<String>,

	/// Secret value to store.
	pub value: Option<String>,
}

/// Extracts the required `id` query parameter.
///
/// The id is read from the query string only. The path form of the route
/// is accepted for compatibility, but a path segment never satisfies this
/// requirement.
#[derive(Debug)]
pub struct RequireSecretId(pub String);

impl<S> FromRequestParts<S> for RequireSecretId
where
	S: Send + Sync,
{
	type Rejection = Response;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let params = match Query::<ShowKeyParams>::from_request_parts(parts, state).await {
			Ok(Query(params)) => params,
			Err(rejection) => {
				tracing::debug!(error = %rejection, "show-key query string is unreadable");
				return Err(api_response::validation_error(ID_REQUIRED));
			}
		};

		match params.id {
			Some(id) if !id.is_empty() => Ok(Self(id)),
			_ => {
				tracing::debug!("show-key request rejected: no id supplied");
				Err(api_response::validation_error(ID_REQUIRED))
			}
		}
	}
}

/// Extracts the required `name` and `value` fields from the request body.
///
/// A missing body, a non-JSON body, and missing or empty fields are all
/// rejected the same way.
#[derive(Debug)]
pub struct RequireKeyPayload {
	pub name: String,
	pub value: String,
}

impl<S> FromRequest<S> for RequireKeyPayload
where
	S: Send + Sync,
{
	type Rejection = Response;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let body = match Json::<CreateKeyRequest>::from_request(req, state).await {
			Ok(Json(body)) => body,
			Err(rejection) => {
				tracing::debug!(error = %rejection, "create-key body is unreadable");
				return Err(api_response::validation_error(NAME_AND_VALUE_REQUIRED));
			}
		};

		match (body.name, body.value) {
			(Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
				Ok(Self { name, value })
			}
			_ => {
				tracing::debug!("create-key request rejected: name or value missing");
				Err(api_response::validation_error(NAME_AND_VALUE_REQUIRED))
			}
		}
	}
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::Body;
	use axum::http::{Request, StatusCode};

	async fn extract_id(uri: &str) -> Result<RequireSecretId, Response> {
		let (mut parts, _) = Request::builder()
			.uri(uri)
			.body(())
			.unwrap()
			.into_parts();

		RequireSecretId::from_request_parts(&mut parts, &()).await
	}

	async fn extract_payload(body: &str) -> Result<RequireKeyPayload, Response> {
		let request = Request::builder()
			.method("POST")
			.uri("/create-key")
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.unwrap();

		RequireKeyPayload::from_request(request, &()).await
	}

	#[tokio::test]
	async fn accepts_present_id() {
		let RequireSecretId(id) = extract_id("/show-key-by-id?id=my-key").await.unwrap();
		assert_eq!(id, "my-key");
	}

	#[tokio::test]
	async fn rejects_missing_id_with_bad_request() {
		let rejection = extract_id("/show-key-by-id").await.unwrap_err();
		assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn rejects_empty_id() {
		assert!(extract_id("/show-key-by-id?id=").await.is_err());
	}

	#[tokio::test]
	async fn ignores_unknown_query_parameters() {
		let RequireSecretId(id) = extract_id("/show-key-by-id?id=k&verbose=1&format=json")
			.await
			.unwrap();
		assert_eq!(id, "k");
	}

	#[tokio::test]
	async fn accepts_complete_payload() {
		let payload = extract_payload(r#"{"name": "api-key", "value": "s3cr3t"}"#)
			.await
			.unwrap();

		assert_eq!(payload.name, "api-key");
		assert_eq!(payload.value, "s3cr3t");
	}

	#[tokio::test]
	async fn rejects_missing_name() {
		let rejection = extract_payload(r#"{"value": "s3cr3t"}"#).await.unwrap_err();
		assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn rejects_missing_value() {
		assert!(extract_payload(r#"{"name": "api-key"}"#).await.is_err());
	}

	#[tokio::test]
	async fn rejects_empty_strings() {
		assert!(extract_payload(r#"{"name": "", "value": "v"}"#).await.is_err());
		assert!(extract_payload(r#"{"name": "k", "value": ""}"#).await.is_err());
	}

	#[tokio::test]
	async fn rejects_empty_body() {
		assert!(extract_payload("").await.is_err());
	}

	#[tokio::test]
	async fn rejects_non_json_body() {
		assert!(extract_payload("name=k&value=v").await.is_err());
	}

	#[tokio::test]
	async fn ignores_unknown_body_fields() {
		let payload = extract_payload(
			r#"{"name": "api-key", "value": "s3cr3t", "comment": "rotated today"}"#,
		)
		.await
		.unwrap();

		assert_eq!(payload.name, "api-key");
	}
}
