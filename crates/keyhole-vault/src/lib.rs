// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Cloud key vault client for Keyhole.
//!
//! This crate provides a typed async client for the vault's secrets REST
//! surface. The vault gates every request behind an authentication
//! challenge: an unauthenticated request is answered with 401 and a
//! `WWW-Authenticate` header naming the token authority and resource. The
//! client parses that challenge, obtains an `Authorization` header value
//! from a pluggable [`Authenticator`], and retries the request once.
//!
//! Tokens are acquired per operation; the client holds no token state.

pub mod challenge;
pub mod client;
pub mod error;
pub mod types;

pub use challenge::AuthChallenge;
pub use client::{Authenticator, VaultClient};
pub use error::VaultError;
pub use types::{SecretAttributes, SecretBundle};
