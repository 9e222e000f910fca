// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Service configuration

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Default bind address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3975";

/// Default description published in the served OpenAPI document
pub const DEFAULT_API_DESCRIPTION: &str = "Example API description.";

/// Default maximum request body size (bytes)
pub const DEFAULT_BODY_MAX_BYTES: usize = 1024 * 1024;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Path Swagger UI is served from
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Menu service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Address the server listens on
    pub bind_address: SocketAddr,
    /// Version published in the served OpenAPI document
    pub api_version: semver::Version,
    /// Description published in the served OpenAPI document
    pub api_description: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3975)),
            api_version: menu_api::MENU_API_VERSION,
            api_description: DEFAULT_API_DESCRIPTION.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// - `BIND_ADDRESS` (default `127.0.0.1:3975`)
    /// - `MENU_API_VERSION` (default: the API crate's version)
    /// - `MENU_API_DESCRIPTION`
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .context("Invalid BIND_ADDRESS")?;

        let api_version = match std::env::var("MENU_API_VERSION") {
            Ok(v) => parse_version(&v).context("Invalid MENU_API_VERSION")?,
            Err(_) => menu_api::MENU_API_VERSION,
        };

        let api_description = std::env::var("MENU_API_DESCRIPTION")
            .unwrap_or_else(|_| DEFAULT_API_DESCRIPTION.to_string());

        Ok(Self {
            bind_address,
            api_version,
            api_description,
        })
    }
}

/// Parse a version, tolerating a leading `v` (e.g. `v0.1.0`)
pub fn parse_version(raw: &str) -> Result<semver::Version, semver::Error> {
    let trimmed = raw.trim();
    semver::Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed))
}
