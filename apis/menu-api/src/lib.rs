// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Dropshot API trait for the example menu service.
//!
//! The OpenAPI document in `openapi-specs/generated/menu-api.json` is
//! generated from this trait by `openapi-manager`, and `menu-client` is in
//! turn generated from that document.
//!
//! ## Endpoints
//!
//! - `GET /answer` - The answer
//! - `POST /hello` - Say hello
//! - `PUT /items` - Update an item's price, or create it
//! - `POST /items/{MenuID}` - Add an item to a menu
//! - `GET /menus` - Get the first menu
//! - `GET /menus/{ID}` - Get a menu by ID
//! - `DELETE /menus/{ID}` - Delete a menu

use dropshot::{Body, HttpError, HttpResponseOk, Path, Query, RequestContext, TypedBody};
use http::Response;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version of the API, as published in the OpenAPI document.
pub const MENU_API_VERSION: semver::Version = semver::Version::new(0, 1, 0);

/// Title of the API, as published in the OpenAPI document.
pub const MENU_API_TITLE: &str = "Menu API";

// ============================================================================
// Models
// ============================================================================

/// A single item on a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Display name, also used to match items on update
    #[serde(rename = "Name")]
    pub name: String,
    /// Price of the item
    #[serde(rename = "Price")]
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A menu and its items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Menu {
    /// Menu identifier
    #[serde(rename = "ID")]
    pub id: i64,
    /// Items in display order (may be null)
    #[serde(rename = "Items")]
    pub items: Option<Vec<Item>>,
}

// ============================================================================
// Parameters
// ============================================================================

/// Path parameter for adding an item to a menu
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MenuItemsPath {
    /// ID of the menu receiving the item
    #[serde(rename = "MenuID")]
    pub menu_id: i64,
}

/// Path parameter for menu-specific endpoints
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MenuPath {
    /// Menu ID
    #[serde(rename = "ID")]
    pub id: i64,
}

/// Query parameters for deleting a menu
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteMenuQuery {
    /// Suppress server-side logging of the deletion
    #[serde(rename = "Quiet")]
    pub quiet: bool,
}

// ============================================================================
// API
// ============================================================================

/// Menu API
///
/// A small example API over an in-memory set of menus.
#[dropshot::api_description]
pub trait MenuApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// Get the answer
    #[endpoint {
        method = GET,
        path = "/answer",
        tags = ["misc"],
    }]
    async fn get_answer(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<i64>, HttpError>;

    /// Say hello
    #[endpoint {
        method = POST,
        path = "/hello",
        tags = ["misc"],
    }]
    async fn post_hello(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<String>, HttpError>;

    /// Update or create an item
    ///
    /// If an item with the same name exists on any menu, its price is
    /// updated. Otherwise the item is added to the second menu.
    ///
    /// Returns 400 if the price is negative.
    #[endpoint {
        method = PUT,
        path = "/items",
        tags = ["items"],
    }]
    async fn put_items(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<Item>,
    ) -> Result<HttpResponseOk<String>, HttpError>;

    /// Add an item to a menu
    ///
    /// Returns 400 if the price is negative, 404 if the menu does not exist.
    #[endpoint {
        method = POST,
        path = "/items/{MenuID}",
        tags = ["items"],
    }]
    async fn post_items_by_menu_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuItemsPath>,
        body: TypedBody<Item>,
    ) -> Result<HttpResponseOk<Item>, HttpError>;

    /// Get the first menu
    #[endpoint {
        method = GET,
        path = "/menus",
        tags = ["menus"],
    }]
    async fn get_menus(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<Menu>, HttpError>;

    /// Get a menu by ID
    #[endpoint {
        method = GET,
        path = "/menus/{ID}",
        tags = ["menus"],
    }]
    async fn get_menu_by_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuPath>,
    ) -> Result<HttpResponseOk<Menu>, HttpError>;

    /// Delete a menu
    ///
    /// Returns 404 if the menu does not exist.
    #[endpoint {
        method = DELETE,
        path = "/menus/{ID}",
        tags = ["menus"],
    }]
    async fn delete_menus_by_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuPath>,
        query: Query<DeleteMenuQuery>,
    ) -> Result<HttpResponseOk<String>, HttpError>;

    // ========================================================================
    // Documentation (not part of the published document)
    // ========================================================================

    /// Serve the OpenAPI document for this API
    #[endpoint {
        method = GET,
        path = "/api-docs/openapi.json",
        unpublished = true,
    }]
    async fn get_openapi_document(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<Response<Body>, HttpError>;

    /// Serve Swagger UI for this API
    #[endpoint {
        method = GET,
        path = "/swagger-ui",
        unpublished = true,
    }]
    async fn get_swagger_ui(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<Response<Body>, HttpError>;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_item_wire_names() {
        let item = Item::new("updatedItem", 22.2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"Name":"updatedItem","Price":22.2}"#);
    }

    #[test]
    fn test_item_rejects_unknown_fields() {
        let result = serde_json::from_str::<Item>(r#"{"Name":"x","Price":1.0,"Extra":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_requires_both_fields() {
        assert!(serde_json::from_str::<Item>(r#"{"Name":"x"}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"Price":1.0}"#).is_err());
    }

    #[test]
    fn test_menu_items_may_be_null_or_absent() {
        let menu: Menu = serde_json::from_str(r#"{"ID":3,"Items":null}"#).unwrap();
        assert_eq!(menu.id, 3);
        assert!(menu.items.is_none());

        let menu: Menu = serde_json::from_str(r#"{"ID":4}"#).unwrap();
        assert!(menu.items.is_none());
    }

    #[test]
    fn test_stub_api_description_builds() {
        let api = menu_api_mod::stub_api_description().unwrap();
        let document = api
            .openapi(MENU_API_TITLE, MENU_API_VERSION)
            .json()
            .unwrap();
        let paths = document["paths"].as_object().unwrap();
        assert!(paths.contains_key("/items/{MenuID}"));
        assert!(paths.contains_key("/menus/{ID}"));
        assert!(!paths.contains_key("/swagger-ui"));
    }
}
