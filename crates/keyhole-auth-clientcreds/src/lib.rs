// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OAuth 2.0 client-credentials authentication for Keyhole.
//!
//! This crate acquires bearer tokens for vault access using the OAuth 2.0
//! client-credentials grant. The vault names the authority to authenticate
//! against in its `WWW-Authenticate` challenge; this crate exchanges the
//! configured client id and secret against that authority for a token.
//!
//! # Token Flow
//!
//! 1. **Challenge**: the vault rejects an unauthenticated request and names
//!    an authorization authority and a target resource.
//! 2. **Exchange**: `POST {authority}/oauth2/token` with
//!    `grant_type=client_credentials`, the configured client id and secret,
//!    and the challenged resource.
//! 3. **Header value**: the response's `token_type` and `access_token`
//!    combine into `<token_type> <access_token>` for the `Authorization`
//!    header of the retried vault request.
//!
//! Tokens are acquired per call and never cached. A failed exchange is
//! reported as an [`AuthError`]; it never aborts the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use keyhole_auth_clientcreds::{ClientCredentialsConfig, CredentialProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientCredentialsConfig::from_env()?;
//! let provider = CredentialProvider::new(config);
//!
//! let token = provider
//!     .acquire_token(
//!         "https://login.windows.net/common",
//!         "https://vault.azure.net",
//!     )
//!     .await?;
//! let header_value = token.authorization_value();
//! # Ok(())
//! # }
//! ```
//!
//! # Security Considerations
//!
//! - Client secrets and access tokens are wrapped in `SecretString` to
//!   prevent accidental logging
//! - Tokens transit only as `Authorization` header values, never as URL
//!   parameters
//! - All authority communication must use HTTPS in production

use keyhole_common_secret::SecretString;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use url::Url;

// =============================================================================
// Constants
// =============================================================================

/// OAuth 2.0 grant type for machine-to-machine authentication.
const GRANT_TYPE: &str = "client_credentials";

/// Path of the token endpoint relative to the authority URL.
const TOKEN_ENDPOINT_SEGMENTS: [&str; 2] = ["oauth2", "token"];

/// Timeout applied to token exchange requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("missing required environment variable: {0}")]
	MissingEnvVar(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Errors that can occur during the token exchange.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
	#[error("HTTP request failed: {0}")]
	HttpRequest(#[from] reqwest::Error),

	#[error("failed to parse token response: {0}")]
	ParseError(String),

	#[error("authority rejected the credential grant: {0}")]
	Rejected(String),

	#[error("invalid authority URL: {0}")]
	InvalidAuthority(String),
}

// =============================================================================
// Configuration
// =============================================================================

/// Client-credentials configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientCredentialsConfig {
	/// Application (client) id registered with the authority.
	pub client_id: String,

	/// Client secret (wrapped to prevent accidental logging).
	pub client_secret: SecretString,
}

impl ClientCredentialsConfig {
	/// Load configuration from environment variables.
	///
	/// Required:
	/// - `KEYHOLE_CLIENT_ID` - application (client) id
	/// - `KEYHOLE_CLIENT_SECRET` - client secret
	pub fn from_env() -> Result<Self, ConfigError> {
		let client_id = std::env::var("KEYHOLE_CLIENT_ID")
			.map_err(|_| ConfigError::MissingEnvVar("KEYHOLE_CLIENT_ID".to_string()))?;

		let client_secret = std::env::var("KEYHOLE_CLIENT_SECRET")
			.map_err(|_| ConfigError::MissingEnvVar("KEYHOLE_CLIENT_SECRET".to_string()))?;

		let config = Self {
			client_id,
			client_secret: SecretString::new(client_secret),
		};
		config.validate()?;
		Ok(config)
	}

	/// Validate the configuration.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::InvalidConfig(
				"client_id cannot be empty".to_string(),
			));
		}

		if self.client_secret.expose().is_empty() {
			return Err(ConfigError::InvalidConfig(
				"client_secret cannot be empty".to_string(),
			));
		}

		Ok(())
	}
}

// =============================================================================
// Token Types
// =============================================================================

/// Successful response from the authority's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
	/// The access token (wrapped to prevent accidental logging).
	#[serde(deserialize_with = "deserialize_secret_string")]
	pub access_token: SecretString,

	/// Token type, typically "Bearer".
	pub token_type: String,
}

impl TokenResponse {
	/// Render the value for an HTTP `Authorization` header.
	///
	/// The shape is `<token_type> <access_token>`, e.g. `Bearer eyJ0eXAi...`.
	pub fn authorization_value(&self) -> String {
		format!("{} {}", self.token_type, self.access_token.expose())
	}
}

/// Deserialize a string into a SecretString.
fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
	D: Deserializer<'de>,
{
	let s = String::deserialize(deserializer)?;
	Ok(SecretString::new(s))
}

/// Error response from the authority's token endpoint (RFC 6749 section 5.2).
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
	error: String,
	error_description: Option<String>,
}

// =============================================================================
// Credential Provider
// =============================================================================

/// Acquires access tokens via the OAuth 2.0 client-credentials grant.
#[derive(Debug, Clone)]
pub struct CredentialProvider {
	config: ClientCredentialsConfig,
	http_client: reqwest::Client,
}

impl CredentialProvider {
	/// Create a new credential provider with the given configuration.
	pub fn new(config: ClientCredentialsConfig) -> Self {
		Self {
			config,
			http_client: keyhole_common_http::builder()
				.timeout(REQUEST_TIMEOUT)
				.build()
				.expect("failed to build HTTP client"),
		}
	}

	/// Exchange the configured client credentials for an access token.
	///
	/// `authority` is the base URL of the token authority (as named by the
	/// vault's challenge) and `resource` is the audience the token must be
	/// valid for. The token endpoint is `{authority}/oauth2/token`.
	#[tracing::instrument(skip(self), name = "CredentialProvider::acquire_token")]
	pub async fn acquire_token(
		&self,
		authority: &str,
		resource: &str,
	) -> Result<TokenResponse, AuthError> {
		tracing::debug!("acquiring access token via client-credentials grant");

		let token_url = Self::token_url(authority)?;

		let response = self
			.http_client
			.post(token_url)
			.header("Accept", "application/json")
			.form(&[
				("grant_type", GRANT_TYPE),
				("client_id", self.config.client_id.as_str()),
				("client_secret", self.config.client_secret.expose()),
				("resource", resource),
			])
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;

		// The authority reports grant failures as an RFC 6749 error body,
		// not always with an error status code. Check for that shape first.
		if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&body) {
			tracing::debug!(error = %error_response.error, "authority rejected the grant");
			let message = error_response
				.error_description
				.unwrap_or(error_response.error);
			return Err(AuthError::Rejected(message));
		}

		if !status.is_success() {
			return Err(AuthError::Rejected(format!(
				"token endpoint returned {status}"
			)));
		}

		let token: TokenResponse = serde_json::from_str(&body)
			.map_err(|e| AuthError::ParseError(e.to_string()))?;

		tracing::debug!(token_type = %token.token_type, "access token acquired");
		Ok(token)
	}

	/// Build the token endpoint URL for an authority.
	fn token_url(authority: &str) -> Result<Url, AuthError> {
		let mut url = Url::parse(authority)
			.map_err(|e| AuthError::InvalidAuthority(format!("{authority}: {e}")))?;

		url.path_segments_mut()
			.map_err(|_| {
				AuthError::InvalidAuthority(format!("{authority}: cannot be a base URL"))
			})?
			.pop_if_empty()
			.extend(TOKEN_ENDPOINT_SEGMENTS);

		Ok(url)
	}
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
