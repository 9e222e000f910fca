// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Menu Service
//!
//! Run with:
//! ```bash
//! cargo run -p menu-service
//! ```
//!
//! Then browse the API at http://localhost:3975/swagger-ui, or point the
//! dev proxy and `menu-cli` at it.

use anyhow::Result;
use dropshot::{ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use tracing::info;

use menu_service::config::{SWAGGER_UI_PATH, ServiceConfig};
use menu_service::context::{ApiContext, MenuStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "menu_service=info,dropshot=info".to_string()),
        ))
        .init();

    let config = ServiceConfig::from_env()?;

    let api_context = ApiContext::new(&config, MenuStore::default())?;

    // Get API description from the trait implementation
    let api = menu_service::api_description()
        .map_err(|e| anyhow::anyhow!("Failed to create API description: {}", e))?;

    let config_dropshot = menu_service::dropshot_config(config.bind_address);

    let config_logging = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };

    let log = config_logging
        .to_logger("menu-service")
        .map_err(|error| anyhow::anyhow!("failed to create logger: {}", error))?;

    // Start the server
    let server = HttpServerStarter::new(&config_dropshot, api, api_context, &log)
        .map_err(|error| anyhow::anyhow!("failed to create server: {}", error))?
        .start();

    let local_addr = server.local_addr();
    info!("Menu service running on http://{}", local_addr);
    info!(
        "Visit http://{}{} to see API definitions",
        local_addr, SWAGGER_UI_PATH
    );

    server
        .await
        .map_err(|error| anyhow::anyhow!("server failed: {}", error))
}
