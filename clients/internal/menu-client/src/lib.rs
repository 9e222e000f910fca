// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Menu API Client
//!
//! A Progenitor-generated client library for the Menu API, generated at build
//! time from `openapi-specs/generated/menu-api.json`.
//!
//! ## Usage
//!
//! The generated [`Client`] exposes one builder per operation:
//!
//! ```ignore
//! use menu_client::{Client, types};
//!
//! let client = Client::new("http://127.0.0.1:3975");
//! let answer = client.get_answer().send().await?.into_inner();
//! ```
//!
//! [`MenuClient`] wraps it with one plain async function per operation:
//!
//! ```ignore
//! use menu_client::{MenuClient, types};
//!
//! let client = MenuClient::new("http://127.0.0.1:5173/api");
//! let item = client
//!     .post_items_by_menu_id(1, types::Item { name: "updatedItem".into(), price: 22.2 })
//!     .await?;
//! ```
//!
//! Every call issues exactly one request. There is no retry, timeout or
//! caching; a non-2xx status or a transport failure is returned as
//! [`MenuClientError`]. Dropping the returned future cancels the call.

// Allow unwrap in generated code - Progenitor uses it in Client::new()
#[allow(clippy::unwrap_used)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/client.rs"));
}
pub use generated::*;

/// Error returned by every Menu API call
pub type MenuClientError = progenitor_client::Error<types::Error>;

/// Typed wrapper around the generated client
///
/// All paths resolve relative to the base URL given at construction, which
/// may itself carry a path prefix (e.g. `http://127.0.0.1:5173/api` when
/// going through the dev proxy).
#[derive(Clone, Debug)]
pub struct MenuClient {
    inner: Client,
}

impl MenuClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Client::new(base_url),
        }
    }

    /// Create a new client reusing an existing reqwest client
    pub fn new_with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            inner: Client::new_with_client(base_url, client),
        }
    }

    /// Access the underlying Progenitor client
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// `GET /answer`
    pub async fn get_answer(&self) -> Result<i64, MenuClientError> {
        tracing::debug!("GET /answer");
        self.inner
            .get_answer()
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `POST /hello`
    pub async fn post_hello(&self) -> Result<String, MenuClientError> {
        tracing::debug!("POST /hello");
        self.inner
            .post_hello()
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `PUT /items`
    pub async fn put_items(&self, item: types::Item) -> Result<String, MenuClientError> {
        tracing::debug!(name = %item.name, "PUT /items");
        self.inner
            .put_items()
            .body(item)
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `POST /items/{MenuID}`
    pub async fn post_items_by_menu_id(
        &self,
        menu_id: i64,
        item: types::Item,
    ) -> Result<types::Item, MenuClientError> {
        tracing::debug!(menu_id, name = %item.name, "POST /items/{{MenuID}}");
        self.inner
            .post_items_by_menu_id()
            .menu_id(menu_id)
            .body(item)
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `GET /menus`
    pub async fn get_menus(&self) -> Result<types::Menu, MenuClientError> {
        tracing::debug!("GET /menus");
        self.inner
            .get_menus()
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `GET /menus/{ID}`
    pub async fn get_menu_by_id(&self, id: i64) -> Result<types::Menu, MenuClientError> {
        tracing::debug!(id, "GET /menus/{{ID}}");
        self.inner
            .get_menu_by_id()
            .id(id)
            .send()
            .await
            .map(ResponseValue::into_inner)
    }

    /// `DELETE /menus/{ID}?Quiet=`
    pub async fn delete_menus_by_id(&self, id: i64, quiet: bool) -> Result<String, MenuClientError> {
        tracing::debug!(id, quiet, "DELETE /menus/{{ID}}");
        self.inner
            .delete_menus_by_id()
            .id(id)
            .quiet(quiet)
            .send()
            .await
            .map(ResponseValue::into_inner)
    }
}

/// Pull the HTTP status out of a failed call, when there is one
pub fn error_status(error: &MenuClientError) -> Option<u16> {
    error.status().map(|status| status.as_u16())
}

/// Human-readable message for a failed call
///
/// Prefers the server's error message when the body decoded as an API error.
pub fn error_message(error: &MenuClientError) -> String {
    match error {
        progenitor_client::Error::ErrorResponse(response) => response.message.clone(),
        other => other.to_string(),
    }
}
