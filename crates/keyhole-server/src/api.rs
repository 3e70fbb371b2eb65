// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP API routes and application state for key operations.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use keyhole_auth_clientcreds::{ClientCredentialsConfig, ConfigError, CredentialProvider};
use keyhole_vault::VaultClient;

use crate::config::ServerConfig;
use crate::{api_docs, routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub vault: Arc<VaultClient<CredentialProvider>>,
}

/// Creates the application state, building the vault client once.
///
/// Client credentials are read from the environment here and nowhere
/// else; the resulting client is shared by every handler for the life of
/// the process.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ConfigError> {
	let credentials = ClientCredentialsConfig::from_env()?;
	let provider = CredentialProvider::new(credentials);
	let vault = Arc::new(VaultClient::new(config.vault.vault_uri.clone(), provider));

	Ok(AppState { vault })
}

/// Creates the HTTP router with all API routes.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		// Health and documentation
		.route("/health", get(routes::health::health_check))
		.route("/api-docs/openapi.json", get(api_docs::openapi_json))
		// Key routes. The path form of show-key-by-id is routed for
		// compatibility, but the id is read from the query string.
		.route("/show-key-by-id", get(routes::keys::show_key_by_id))
		.route("/show-key-by-id/{id}", get(routes::keys::show_key_by_id))
		.route("/create-key", post(routes::keys::create_key))
		.with_state(state)
}
