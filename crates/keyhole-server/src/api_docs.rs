// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for keyhole-server.
//!
//! This module provides the OpenAPI 3.0 specification for the Keyhole API,
//! generated from Rust types using utoipa.

use axum::Json;
use utoipa::OpenApi;

/// Main OpenAPI documentation struct.
///
/// This generates the complete OpenAPI specification for the Keyhole API.
/// The raw JSON spec is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Keyhole API",
        version = "1.0.0",
        description = "HTTP facade over a cloud key vault. Keyhole exposes minimal endpoints for reading and storing vault secrets, authenticating to the vault per request with the OAuth 2.0 client-credentials grant.",
        license(name = "Proprietary"),
        contact(
            name = "Geoffrey Huntley",
            email = "ghuntley@ghuntley.com",
            url = "https://ghuntley.com"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "keys", description = "Secret read and write operations backed by the vault"),
        (name = "health", description = "Health checks and system status")
    ),
    paths(
        crate::routes::keys::show_key_by_id,
        crate::routes::keys::create_key,
        crate::routes::health::health_check
    ),
    components(
        schemas(
            crate::routes::keys::ShowKeyResponse,
            crate::routes::keys::CreateKeyResponse,
            crate::routes::health::HealthResponse,
            crate::api_response::KeyErrorResponse,
            crate::validation::CreateKeyRequest,
            keyhole_vault::SecretBundle,
            keyhole_vault::SecretAttributes
        )
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - Raw OpenAPI specification.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

// =============================================================================
// Tests
// =============================================================================
