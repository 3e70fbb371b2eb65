// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server configuration loaded from environment variables.
//!
//! Configuration is read once at startup:
//! - `KEYHOLE_HOST` - listen address (default `0.0.0.0`)
//! - `KEYHOLE_PORT` - listen port (default `3000`)
//! - `KEYHOLE_VAULT_URI` - base URI of the vault (required)
//! - `KEYHOLE_LOG_LEVEL` - default tracing filter (default `info`)
//!
//! The client credentials (`KEYHOLE_CLIENT_ID`, `KEYHOLE_CLIENT_SECRET`)
//! are loaded separately by the authentication crate.

use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("missing required environment variable: {0}")]
	MissingEnvVar(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: DEFAULT_HOST.to_string(),
			port: DEFAULT_PORT,
		}
	}
}

/// Vault endpoint configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
	pub vault_uri: Url,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub vault: VaultConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from environment variables.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let host = std::env::var("KEYHOLE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

	let port = match std::env::var("KEYHOLE_PORT") {
		Ok(raw) => raw.parse::<u16>().map_err(|_| {
			ConfigError::InvalidConfig(format!("KEYHOLE_PORT is not a valid port: {raw}"))
		})?,
		Err(_) => DEFAULT_PORT,
	};

	let vault_uri = std::env::var("KEYHOLE_VAULT_URI")
		.map_err(|_| ConfigError::MissingEnvVar("KEYHOLE_VAULT_URI".to_string()))
		.and_then(|raw| parse_vault_uri(&raw))?;

	let level =
		std::env::var("KEYHOLE_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

	Ok(ServerConfig {
		http: HttpConfig { host, port },
		vault: VaultConfig { vault_uri },
		logging: LoggingConfig { level },
	})
}

/// Parse and validate the vault base URI.
fn parse_vault_uri(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|e| {
		ConfigError::InvalidConfig(format!("KEYHOLE_VAULT_URI is not a valid URL: {e}"))
	})?;

	if url.scheme() != "https" && url.scheme() != "http" {
		return Err(ConfigError::InvalidConfig(format!(
			"KEYHOLE_VAULT_URI must be an http(s) URL, got scheme '{}'",
			url.scheme()
		)));
	}

	Ok(url)
}

// =============================================================================
// Tests
// =============================================================================
