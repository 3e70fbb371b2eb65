// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the vault client.

use keyhole_auth_clientcreds::AuthError;
use thiserror::Error;

/// Errors that can occur when interacting with the vault.
///
/// Failures are classified by kind rather than reported as raw status
/// codes, so callers can map them onto their own response surface without
/// string matching.
#[derive(Debug, Error)]
pub enum VaultError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The vault does not hold the named secret or version.
	#[error("Secret not found: {0}")]
	NotFound(String),

	/// The vault rejected the request as malformed.
	#[error("Vault rejected the request: {0}")]
	InvalidInput(String),

	/// The vault refused the presented credentials for this operation.
	#[error("Unauthorized: {0}")]
	Unauthorized(String),

	/// The vault is temporarily unable to serve the request.
	#[error("Transient vault failure: {0}")]
	Transient(String),

	/// The token exchange with the challenged authority failed.
	#[error("Authentication failed: {0}")]
	Auth(#[from] AuthError),

	/// The vault demanded authentication without a usable challenge.
	#[error("Unusable authentication challenge: {0}")]
	Challenge(String),

	/// Invalid or unparseable response from the vault.
	#[error("Invalid response from vault: {0}")]
	InvalidResponse(String),

	/// The vault returned an error this client does not classify.
	#[error("Vault error: {status} - {message}")]
	Unknown { status: u16, message: String },
}
