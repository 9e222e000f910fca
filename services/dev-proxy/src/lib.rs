// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Development proxy for the menu service
//!
//! Requests under a path prefix (`/api` by default) are forwarded to the
//! backend with the prefix stripped, so a browser or CLI talking to one
//! origin reaches the menu service running on another. `Host`, and `Origin`
//! when present, are rewritten to the backend's.

pub mod config;
pub mod error;
pub mod proxy;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use proxy::{rewrite_path, router, serve};
