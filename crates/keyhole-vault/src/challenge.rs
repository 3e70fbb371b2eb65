// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Parsing of the vault's `WWW-Authenticate` challenge.
//!
//! When the vault receives a request without credentials it answers 401
//! with a Bearer challenge naming the token authority and the resource a
//! token must be valid for:
//!
//! ```text
//! Bearer authorization="https://login.windows.net/{tenant}", resource="https://vault.azure.net"
//! ```

use crate::error::VaultError;

/// Authentication parameters extracted from a vault challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChallenge {
	/// Base URL of the token authority to authenticate against.
	pub authorization: String,

	/// Resource the acquired token must be valid for.
	pub resource: String,
}

impl AuthChallenge {
	/// Parse a `WWW-Authenticate` header value.
	///
	/// This understands the vault's Bearer challenge shape, not arbitrary
	/// RFC 7235 challenge lists. The authority parameter is accepted under
	/// both its `authorization` and `authorization_uri` spellings.
	pub fn parse(header: &str) -> Result<Self, VaultError> {
		let params = header
			.strip_prefix("Bearer ")
			.or_else(|| header.strip_prefix("bearer "))
			.ok_or_else(|| {
				VaultError::Challenge(format!("not a Bearer challenge: {header}"))
			})?;

		let mut authorization = None;
		let mut resource = None;

		for part in params.split(',') {
			let Some((key, value)) = part.split_once('=') else {
				continue;
			};
			let value = value.trim().trim_matches('"');

			match key.trim() {
				"authorization" | "authorization_uri" => {
					authorization = Some(value.to_string())
				}
				"resource" => resource = Some(value.to_string()),
				_ => {}
			}
		}

		Ok(Self {
			authorization: authorization.ok_or_else(|| {
				VaultError::Challenge("challenge names no token authority".to_string())
			})?,
			resource: resource.ok_or_else(|| {
				VaultError::Challenge("challenge names no resource".to_string())
			})?,
		})
	}

	/// Extract the challenge from a 401 vault response.
	pub fn from_response(response: &reqwest::Response) -> Result<Self, VaultError> {
		let header = response
			.headers()
			.get(reqwest::header::WWW_AUTHENTICATE)
			.ok_or_else(|| {
				VaultError::Challenge(
					"401 response carries no WWW-Authenticate header".to_string(),
				)
			})?
			.to_str()
			.map_err(|_| {
				VaultError::Challenge(
					"WWW-Authenticate header is not valid UTF-8".to_string(),
				)
			})?;

		Self::parse(header)
	}
}

// =============================================================================
// Tests
// =============================================================================
