// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire types for the vault's secrets surface.
//!
//! Field names follow the vault's JSON representation, so these types
//! round-trip unchanged between the vault and API consumers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A secret as returned by the vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SecretBundle {
	/// The secret value.
	pub value: String,

	/// Full identifier of this secret version, as a URL.
	pub id: String,

	/// Content type hint, if one was set when the secret was stored.
	#[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
	pub content_type: Option<String>,

	/// Lifecycle attributes of this version.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attributes: Option<SecretAttributes>,

	/// Application-specific tags.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<HashMap<String, String>>,
}

/// Lifecycle attributes attached to a secret version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SecretAttributes {
	/// Whether the secret is usable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,

	/// Not-before time, as a Unix timestamp.
	#[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
	pub not_before: Option<i64>,

	/// Expiry time, as a Unix timestamp.
	#[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
	pub expires: Option<i64>,

	/// Creation time, as a Unix timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub created: Option<i64>,

	/// Last update time, as a Unix timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated: Option<i64>,

	/// Deletion recovery level configured on the vault.
	#[serde(rename = "recoveryLevel", skip_serializing_if = "Option::is_none")]
	pub recovery_level: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
