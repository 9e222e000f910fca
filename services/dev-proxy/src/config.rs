// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Proxy configuration

use std::net::SocketAddr;

use url::Url;

use crate::error::ProxyError;

/// Default address the proxy listens on
pub const DEFAULT_LISTEN: &str = "127.0.0.1:5173";

/// Default path prefix forwarded to the backend
pub const DEFAULT_PREFIX: &str = "/api";

/// Default backend origin
pub const DEFAULT_TARGET: &str = "http://127.0.0.1:3975";

/// Validated proxy configuration
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Address the proxy listens on
    pub listen: SocketAddr,
    /// Normalized prefix: begins with `/`, no trailing `/`, empty for "everything"
    prefix: String,
    /// Backend origin requests are forwarded to
    target: Url,
}

impl ProxyConfig {
    /// Validate and normalize a proxy configuration
    ///
    /// The prefix may be given with or without leading and trailing slashes.
    /// The target must be an absolute `http` URL without query or fragment.
    pub fn new(listen: SocketAddr, prefix: &str, target: Url) -> Result<Self, ProxyError> {
        if target.scheme() != "http" {
            return Err(ProxyError::InvalidConfig(format!(
                "target must use http, got {}",
                target.scheme()
            )));
        }
        if target.host_str().is_none() {
            return Err(ProxyError::InvalidConfig(format!(
                "target has no host: {}",
                target
            )));
        }
        if target.query().is_some() || target.fragment().is_some() {
            return Err(ProxyError::InvalidConfig(format!(
                "target must not carry a query or fragment: {}",
                target
            )));
        }

        let trimmed = prefix.trim().trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };

        Ok(Self {
            listen,
            prefix,
            target,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Backend URL without a trailing slash, ready to have a path appended
    pub fn target_base(&self) -> &str {
        self.target.as_str().trim_end_matches('/')
    }

    /// `Origin` value presented to the backend
    pub fn target_origin(&self) -> String {
        self.target.origin().ascii_serialization()
    }
}
