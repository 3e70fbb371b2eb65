// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vault client implementation.

use std::time::Duration;

use async_trait::async_trait;
use keyhole_auth_clientcreds::{AuthError, CredentialProvider};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use url::Url;

use crate::challenge::AuthChallenge;
use crate::error::VaultError;
use crate::types::SecretBundle;

/// Version of the vault REST API this client speaks.
const API_VERSION: &str = "7.4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Authenticator
// =============================================================================

/// Supplies `Authorization` header values in answer to vault challenges.
///
/// The vault names a token authority and resource in its challenge;
/// implementations turn those into a complete header value such as
/// `Bearer eyJ0eXAi...`. Implementations are called once per challenged
/// request; they must not assume any caching.
#[async_trait]
pub trait Authenticator: Send + Sync {
	async fn authorization_for(&self, challenge: &AuthChallenge) -> Result<String, AuthError>;
}

#[async_trait]
impl Authenticator for CredentialProvider {
	async fn authorization_for(&self, challenge: &AuthChallenge) -> Result<String, AuthError> {
		let token = self
			.acquire_token(&challenge.authorization, &challenge.resource)
			.await?;
		Ok(token.authorization_value())
	}
}

// =============================================================================
// Client
// =============================================================================

/// Client for the vault's secrets REST surface.
#[derive(Debug, Clone)]
pub struct VaultClient<A> {
	http_client: Client,
	vault_uri: Url,
	authenticator: A,
}

#[derive(Debug, Serialize)]
struct SetSecretBody<'a> {
	value: &'a str,
}

#[derive(Debug, Deserialize)]
struct VaultErrorBody {
	error: VaultErrorDetail,
}

#[derive(Debug, Deserialize)]
struct VaultErrorDetail {
	code: Option<String>,
	message: Option<String>,
}

impl<A: Authenticator> VaultClient<A> {
	/// Creates a new vault client for the given vault base URI.
	pub fn new(vault_uri: Url, authenticator: A) -> Self {
		let http_client = keyhole_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			vault_uri,
			authenticator,
		}
	}

	/// Fetch a secret from the vault.
	///
	/// An empty `version` addresses the latest version of the secret.
	#[instrument(skip(self), name = "VaultClient::get_secret")]
	pub async fn get_secret(
		&self,
		name: &str,
		version: &str,
	) -> Result<SecretBundle, VaultError> {
		let url = self.secret_url(name, version)?;
		debug!(url = %url, "Fetching secret from vault");

		let response = self
			.send_authenticated(|| self.http_client.get(url.clone()))
			.await?;

		self.read_bundle(response).await
	}

	/// Store a secret value, creating a new version.
	///
	/// Returns the stored secret as reported back by the vault.
	#[instrument(skip(self, value), name = "VaultClient::set_secret")]
	pub async fn set_secret(&self, name: &str, value: &str) -> Result<SecretBundle, VaultError> {
		let url = self.secret_url(name, "")?;
		debug!(url = %url, "Storing secret in vault");

		let body = SetSecretBody { value };
		let response = self
			.send_authenticated(|| self.http_client.put(url.clone()).json(&body))
			.await?;

		self.read_bundle(response).await
	}

	/// Execute a request, answering the vault's authentication challenge.
	///
	/// The first attempt carries no credentials. When the vault answers 401
	/// with a challenge, an `Authorization` value is obtained for that
	/// challenge and the request is resent exactly once. Any other first
	/// response, and whatever the second attempt returns, is passed through
	/// for classification.
	async fn send_authenticated(
		&self,
		make_request: impl Fn() -> reqwest::RequestBuilder,
	) -> Result<reqwest::Response, VaultError> {
		let response = make_request().send().await?;

		if response.status() != StatusCode::UNAUTHORIZED {
			return Ok(response);
		}

		let challenge = AuthChallenge::from_response(&response)?;
		debug!(
			authority = %challenge.authorization,
			resource = %challenge.resource,
			"Answering vault authentication challenge"
		);

		let authorization = self.authenticator.authorization_for(&challenge).await?;

		let response = make_request()
			.header(reqwest::header::AUTHORIZATION, authorization)
			.send()
			.await?;

		Ok(response)
	}

	async fn read_bundle(&self, response: reqwest::Response) -> Result<SecretBundle, VaultError> {
		let status = response.status();
		debug!(status = %status, "Received response from vault");

		let body = response.text().await?;

		if !status.is_success() {
			let vault_error = classify_failure(status, &body);
			error!(status = %status, error = %vault_error, "Vault request failed");
			return Err(vault_error);
		}

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse vault response");
			VaultError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}

	/// Build the URL for a secret, percent-encoding the name and version.
	fn secret_url(&self, name: &str, version: &str) -> Result<Url, VaultError> {
		let mut url = self.vault_uri.clone();

		{
			let mut segments = url.path_segments_mut().map_err(|_| {
				VaultError::InvalidInput(format!(
					"vault URI cannot address secrets: {}",
					self.vault_uri
				))
			})?;
			segments.pop_if_empty().push("secrets").push(name);
			if !version.is_empty() {
				segments.push(version);
			}
		}

		url.query_pairs_mut().append_pair("api-version", API_VERSION);
		Ok(url)
	}
}

/// Map a vault error status and body onto [`VaultError`].
fn classify_failure(status: StatusCode, body: &str) -> VaultError {
	let message = error_message(body).unwrap_or_else(|| status.to_string());

	match status.as_u16() {
		400 => VaultError::InvalidInput(message),
		401 | 403 => VaultError::Unauthorized(message),
		404 => VaultError::NotFound(message),
		429 | 500..=599 => VaultError::Transient(message),
		other => VaultError::Unknown {
			status: other,
			message,
		},
	}
}

/// Extract `code: message` from a vault error body, if it has that shape.
fn error_message(body: &str) -> Option<String> {
	let parsed: VaultErrorBody = serde_json::from_str(body).ok()?;

	match (parsed.error.code, parsed.error.message) {
		(Some(code), Some(message)) => Some(format!("{code}: {message}")),
		(None, Some(message)) => Some(message),
		(Some(code), None) => Some(code),
		(None, None) => None,
	}
}

// =============================================================================
// Tests
// =============================================================================
