// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Menu Service Library
//!
//! Example backend for the Menu API. Menus live in memory and start out as
//! a food menu and a drinks menu.
//!
//! # Modules
//!
//! - [`config`] - Service configuration (bind address, published API metadata)
//! - [`context`] - API context and menu state
//! - [`swagger`] - Swagger UI page

pub mod config;
pub mod context;
pub mod swagger;

use std::net::SocketAddr;

use dropshot::{
    Body, ConfigDropshot, HttpError, HttpResponseOk, Path, Query, RequestContext, TypedBody,
};
use http::Response;
use menu_api::{DeleteMenuQuery, Item, MENU_API_TITLE, Menu, MenuApi, MenuItemsPath, MenuPath};

use crate::config::{DEFAULT_BODY_MAX_BYTES, OPENAPI_PATH};
use crate::context::{ApiContext, PutOutcome};

/// Menu API implementation
///
/// This enum serves as the implementation type for the `MenuApi` trait.
/// It contains no data - all state is stored in the `ApiContext`.
pub enum MenuServiceImpl {}

impl MenuApi for MenuServiceImpl {
    type Context = ApiContext;

    async fn get_answer(
        _rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<i64>, HttpError> {
        Ok(HttpResponseOk(42))
    }

    async fn post_hello(
        _rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<String>, HttpError> {
        tracing::info!("Hello, world!");
        Ok(HttpResponseOk("Hello, world!".to_string()))
    }

    async fn put_items(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<Item>,
    ) -> Result<HttpResponseOk<String>, HttpError> {
        let ctx = rqctx.context();
        let item = body.into_inner();

        let message = match ctx.store.put_item(item).await? {
            PutOutcome::Updated(item) => {
                tracing::info!(name = %item.name, price = item.price, "Updated item");
                format!("updated item {}", item.name)
            }
            PutOutcome::Created(item) => {
                tracing::info!(name = %item.name, price = item.price, "Created item");
                format!("created item {}", item.name)
            }
        };

        Ok(HttpResponseOk(message))
    }

    async fn post_items_by_menu_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuItemsPath>,
        body: TypedBody<Item>,
    ) -> Result<HttpResponseOk<Item>, HttpError> {
        let ctx = rqctx.context();
        let menu_id = path.into_inner().menu_id;

        let item = ctx.store.add_item(menu_id, body.into_inner()).await?;
        tracing::info!(menu_id, name = %item.name, "Added item to menu");

        Ok(HttpResponseOk(item))
    }

    async fn get_menus(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<Menu>, HttpError> {
        let menu = rqctx.context().store.first().await?;
        Ok(HttpResponseOk(menu))
    }

    async fn get_menu_by_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuPath>,
    ) -> Result<HttpResponseOk<Menu>, HttpError> {
        let id = path.into_inner().id;
        let menu = rqctx.context().store.get(id).await?;
        Ok(HttpResponseOk(menu))
    }

    async fn delete_menus_by_id(
        rqctx: RequestContext<Self::Context>,
        path: Path<MenuPath>,
        query: Query<DeleteMenuQuery>,
    ) -> Result<HttpResponseOk<String>, HttpError> {
        let ctx = rqctx.context();
        let id = path.into_inner().id;
        let quiet = query.into_inner().quiet;

        ctx.store.delete(id).await?;
        if !quiet {
            tracing::info!(menu_id = id, "Deleted menu");
        }

        Ok(HttpResponseOk(format!("deleted menu {}", id)))
    }

    async fn get_openapi_document(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<Response<Body>, HttpError> {
        let document = serde_json::to_string(&rqctx.context().openapi)
            .map_err(|e| HttpError::for_internal_error(format!("Failed to encode document: {}", e)))?;

        Response::builder()
            .status(200)
            .header("Content-Type", "application/json")
            .body(document.into())
            .map_err(|e| HttpError::for_internal_error(e.to_string()))
    }

    async fn get_swagger_ui(
        _rqctx: RequestContext<Self::Context>,
    ) -> Result<Response<Body>, HttpError> {
        let html = swagger::swagger_ui_page(OPENAPI_PATH, MENU_API_TITLE);

        Response::builder()
            .status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Content-Security-Policy", swagger::SWAGGER_UI_CSP)
            .body(html.into())
            .map_err(|e| HttpError::for_internal_error(e.to_string()))
    }
}

/// Create the Dropshot API description for the service
pub fn api_description() -> Result<dropshot::ApiDescription<ApiContext>, String> {
    menu_api::menu_api_mod::api_description::<MenuServiceImpl>().map_err(|e| e.to_string())
}

/// Dropshot server configuration for the given bind address
pub fn dropshot_config(bind_address: SocketAddr) -> ConfigDropshot {
    ConfigDropshot {
        bind_address,
        default_request_body_max_bytes: DEFAULT_BODY_MAX_BYTES,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    }
}
