// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

use dev_proxy::ProxyConfig;
use dev_proxy::config::{DEFAULT_LISTEN, DEFAULT_PREFIX, DEFAULT_TARGET};

#[derive(Parser)]
#[command(name = "dev-proxy")]
#[command(about = "Forward a path prefix to the menu service during development", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "DEV_PROXY_LISTEN", default_value = DEFAULT_LISTEN)]
    listen: SocketAddr,

    /// Path prefix to forward; stripped before forwarding
    #[arg(long, env = "DEV_PROXY_PREFIX", default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Backend origin
    #[arg(long, env = "DEV_PROXY_TARGET", default_value = DEFAULT_TARGET)]
    target: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dev_proxy=info".to_string()),
        ))
        .init();

    let cli = Cli::parse();
    let config = ProxyConfig::new(cli.listen, &cli.prefix, cli.target)?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    info!(
        "Proxying http://{}{} to {}",
        listener.local_addr()?,
        config.prefix(),
        config.target_base()
    );

    dev_proxy::serve(listener, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
