// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Keyhole secret access server.
//!
//! This crate provides an HTTP facade over a cloud key vault: two minimal
//! endpoints for reading and storing secrets, with the vault's
//! authentication challenge answered per request via the OAuth 2.0
//! client-credentials grant.

pub mod api;
pub mod api_docs;
pub mod api_response;
pub mod config;
pub mod routes;
pub mod validation;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use config::{load_config, ServerConfig};
