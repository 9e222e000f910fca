// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API context and in-memory menu state

use anyhow::Result;
use dropshot::{ClientErrorStatusCode, HttpError};
use menu_api::{Item, MENU_API_TITLE, Menu};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::config::ServiceConfig;

/// Failures of menu operations
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("Price cannot be negative")]
    NegativePrice,
    #[error("menu {0} not found")]
    MenuNotFound(i64),
    #[error("no menus available")]
    NoMenus,
}

impl From<MenuError> for HttpError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NegativePrice => HttpError::for_bad_request(None, e.to_string()),
            MenuError::MenuNotFound(_) | MenuError::NoMenus => {
                HttpError::for_client_error(None, ClientErrorStatusCode::NOT_FOUND, e.to_string())
            }
        }
    }
}

/// Result of an item upsert
#[derive(Debug, Clone, PartialEq)]
pub enum PutOutcome {
    /// An item with the same name existed and its price was replaced
    Updated(Item),
    /// No item had that name; it was added to a menu
    Created(Item),
}

/// The menus served by the example backend
pub fn default_menus() -> Vec<Menu> {
    vec![
        Menu {
            id: 1,
            items: Some(vec![Item::new("Steak", 13.95), Item::new("Potatoes", 3.95)]),
        },
        Menu {
            id: 2,
            items: Some(vec![Item::new("Juice", 1.25), Item::new("Soda", 1.75)]),
        },
    ]
}

fn validate_price(item: &Item) -> Result<(), MenuError> {
    if item.price < 0.0 {
        return Err(MenuError::NegativePrice);
    }
    Ok(())
}

/// Menu state shared by all handlers
#[derive(Debug)]
pub struct MenuStore {
    menus: RwLock<Vec<Menu>>,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(default_menus())
    }
}

impl MenuStore {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self {
            menus: RwLock::new(menus),
        }
    }

    /// First menu in store order
    pub async fn first(&self) -> Result<Menu, MenuError> {
        self.menus
            .read()
            .await
            .first()
            .cloned()
            .ok_or(MenuError::NoMenus)
    }

    pub async fn get(&self, id: i64) -> Result<Menu, MenuError> {
        self.menus
            .read()
            .await
            .iter()
            .find(|menu| menu.id == id)
            .cloned()
            .ok_or(MenuError::MenuNotFound(id))
    }

    /// Update the price of the item with the same name on any menu, or add
    /// the item to the second menu (the last one when there are fewer).
    pub async fn put_item(&self, item: Item) -> Result<PutOutcome, MenuError> {
        validate_price(&item)?;

        let mut menus = self.menus.write().await;
        for menu in menus.iter_mut() {
            if let Some(existing) = menu
                .items
                .iter_mut()
                .flatten()
                .find(|existing| existing.name == item.name)
            {
                existing.price = item.price;
                return Ok(PutOutcome::Updated(existing.clone()));
            }
        }

        let index = menus.len().min(2).checked_sub(1).ok_or(MenuError::NoMenus)?;
        let menu = menus.get_mut(index).ok_or(MenuError::NoMenus)?;
        menu.items.get_or_insert_with(Vec::new).push(item.clone());
        Ok(PutOutcome::Created(item))
    }

    /// Append an item to the menu with the given ID
    pub async fn add_item(&self, menu_id: i64, item: Item) -> Result<Item, MenuError> {
        validate_price(&item)?;

        let mut menus = self.menus.write().await;
        let menu = menus
            .iter_mut()
            .find(|menu| menu.id == menu_id)
            .ok_or(MenuError::MenuNotFound(menu_id))?;
        menu.items.get_or_insert_with(Vec::new).push(item.clone());
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> Result<Menu, MenuError> {
        let mut menus = self.menus.write().await;
        let position = menus
            .iter()
            .position(|menu| menu.id == id)
            .ok_or(MenuError::MenuNotFound(id))?;
        Ok(menus.remove(position))
    }
}

/// API context shared across all request handlers
pub struct ApiContext {
    pub store: MenuStore,
    /// OpenAPI document served at `/api-docs/openapi.json`
    pub openapi: serde_json::Value,
}

impl ApiContext {
    pub fn new(config: &ServiceConfig, store: MenuStore) -> Result<Self> {
        let openapi = openapi_document(config)?;
        Ok(Self { store, openapi })
    }
}

/// Build the OpenAPI document from the API trait
pub fn openapi_document(config: &ServiceConfig) -> Result<serde_json::Value> {
    let api = menu_api::menu_api_mod::stub_api_description()
        .map_err(|e| anyhow::anyhow!("Failed to create API description: {}", e))?;
    let mut definition = api.openapi(MENU_API_TITLE, config.api_version.clone());
    definition.description(&config.api_description);
    Ok(definition.json()?)
}
