// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the client-credentials token exchange against a
//! mock authority.

use keyhole_auth_clientcreds::{AuthError, ClientCredentialsConfig, CredentialProvider};
use keyhole_common_secret::SecretString;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_provider() -> CredentialProvider {
	CredentialProvider::new(ClientCredentialsConfig {
		client_id: "test-client-id".to_string(),
		client_secret: SecretString::new("test-client-secret"),
	})
}

#[tokio::test]
async fn acquire_token_exchanges_credentials() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/tenant-a/oauth2/token"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"token_type": "Bearer",
			"access_token": "acquired-token",
			"expires_in": "3599",
			"resource": "https://vault.example.net"
		})))
		.expect(1)
		.mount(&authority)
		.await;

	let token = test_provider()
		.acquire_token(
			&format!("{}/tenant-a", authority.uri()),
			"https://vault.example.net",
		)
		.await
		.unwrap();

	assert_eq!(token.token_type, "Bearer");
	assert_eq!(token.authorization_value(), "Bearer acquired-token");
}

#[tokio::test]
async fn acquire_token_sends_form_encoded_grant() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/oauth2/token"))
		.and(header("content-type", "application/x-www-form-urlencoded"))
		.and(body_string_contains("grant_type=client_credentials"))
		.and(body_string_contains("client_id=test-client-id"))
		.and(body_string_contains("client_secret=test-client-secret"))
		.and(body_string_contains("resource=https%3A%2F%2Fvault.example.net"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"token_type": "Bearer",
			"access_token": "tok"
		})))
		.expect(1)
		.mount(&authority)
		.await;

	let result = test_provider()
		.acquire_token(&authority.uri(), "https://vault.example.net")
		.await;

	assert!(result.is_ok());
}

#[tokio::test]
async fn acquire_token_surfaces_authority_rejection() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/oauth2/token"))
		.respond_with(ResponseTemplate::new(401).set_body_json(json!({
			"error": "invalid_client",
			"error_description": "AADSTS7000215: invalid client secret provided"
		})))
		.mount(&authority)
		.await;

	let result = test_provider()
		.acquire_token(&authority.uri(), "https://vault.example.net")
		.await;

	match result {
		Err(AuthError::Rejected(message)) => assert!(message.contains("AADSTS7000215")),
		other => panic!("expected Rejected error, got {other:?}"),
	}
}

#[tokio::test]
async fn acquire_token_detects_error_body_despite_ok_status() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/oauth2/token"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"error": "unauthorized_client"
		})))
		.mount(&authority)
		.await;

	let result = test_provider()
		.acquire_token(&authority.uri(), "https://vault.example.net")
		.await;

	match result {
		Err(AuthError::Rejected(message)) => assert_eq!(message, "unauthorized_client"),
		other => panic!("expected Rejected error, got {other:?}"),
	}
}

#[tokio::test]
async fn acquire_token_reports_non_json_failures() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/oauth2/token"))
		.respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
		.mount(&authority)
		.await;

	let result = test_provider()
		.acquire_token(&authority.uri(), "https://vault.example.net")
		.await;

	match result {
		Err(AuthError::Rejected(message)) => assert!(message.contains("503")),
		other => panic!("expected Rejected error, got {other:?}"),
	}
}

#[tokio::test]
async fn acquire_token_rejects_malformed_success_body() {
	let authority = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/oauth2/token"))
		.respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
		.mount(&authority)
		.await;

	let result = test_provider()
		.acquire_token(&authority.uri(), "https://vault.example.net")
		.await;

	assert!(matches!(result, Err(AuthError::ParseError(_))));
}

#[tokio::test]
async fn acquire_token_propagates_connection_failures() {
	// Nothing listens on the discard port; the exchange must fail with an
	// error rather than panic.
	let result = test_provider()
		.acquire_token("http://127.0.0.1:9", "https://vault.example.net")
		.await;

	assert!(matches!(result, Err(AuthError::HttpRequest(_))));
}
