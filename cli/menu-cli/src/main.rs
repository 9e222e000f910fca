// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use anyhow::Result;
use clap::{Parser, Subcommand};
use menu_client::{MenuClient, MenuClientError, error_message, error_status, types};
use serde::Serialize;
use tracing::info;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5173/api";

#[derive(Parser)]
#[command(name = "menu-cli")]
#[command(about = "CLI for the example Menu API", long_about = None)]
struct Cli {
    /// Base URL of the Menu API (the dev proxy's `/api` prefix by default)
    #[arg(long, env = "MENU_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the example call sequence
    Demo,
    /// Get the answer
    Answer,
    /// Say hello
    Hello,
    /// Update an item's price by name, or create it
    PutItem {
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Add an item to a menu
    AddItem {
        menu_id: i64,
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Show the first menu
    Menus,
    /// Show a menu by ID
    Menu { id: i64 },
    /// Delete a menu
    DeleteMenu {
        id: i64,
        /// Ask the server not to log the deletion
        #[arg(long)]
        quiet: bool,
    },
}

/// Turn a failed call into an error naming the operation
fn call_failed(operation: &str, error: MenuClientError) -> anyhow::Error {
    match error_status(&error) {
        Some(status) => anyhow::anyhow!(
            "{} failed ({}): {}",
            operation,
            status,
            error_message(&error)
        ),
        None => anyhow::anyhow!("{} failed: {}", operation, error_message(&error)),
    }
}

fn item(name: &str, price: f64) -> types::Item {
    types::Item {
        name: name.to_string(),
        price,
    }
}

/// Issue the example calls in order, stopping at the first failure
async fn run_demo(client: &MenuClient) -> Result<()> {
    client
        .post_hello()
        .await
        .map_err(|e| call_failed("post_hello", e))?;

    let answer = client
        .get_answer()
        .await
        .map_err(|e| call_failed("get_answer", e))?;
    info!(answer, "Got answer");

    let added = client
        .post_items_by_menu_id(1, item("updatedItem", 22.2))
        .await
        .map_err(|e| call_failed("post_items_by_menu_id", e))?;
    info!(name = %added.name, price = added.price, "Added item to menu 1");

    client
        .put_items(item("newItem", 33.3))
        .await
        .map_err(|e| call_failed("put_items", e))?;

    client
        .delete_menus_by_id(2, false)
        .await
        .map_err(|e| call_failed("delete_menus_by_id", e))?;

    Ok(())
}

fn format_item(item: &types::Item) -> String {
    format!("{:<20} {:>8.2}", item.name, item.price)
}

fn format_menu(menu: &types::Menu) -> String {
    let mut out = format!("Menu {}", menu.id);
    match &menu.items {
        Some(items) if !items.is_empty() => {
            for item in items {
                out.push_str("\n  ");
                out.push_str(&format_item(item));
            }
        }
        _ => out.push_str("\n  (no items)"),
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "menu_cli=info".to_string()),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = MenuClient::new(&cli.base_url);

    match cli.command {
        Commands::Demo => {
            run_demo(&client).await?;
            info!("Demo complete");
        }
        Commands::Answer => {
            let answer = client
                .get_answer()
                .await
                .map_err(|e| call_failed("get_answer", e))?;
            if cli.json {
                print_json(&answer)?;
            } else {
                println!("{}", answer);
            }
        }
        Commands::Hello => {
            let text = client
                .post_hello()
                .await
                .map_err(|e| call_failed("post_hello", e))?;
            if cli.json {
                print_json(&text)?;
            } else {
                println!("{}", text);
            }
        }
        Commands::PutItem { name, price } => {
            let text = client
                .put_items(item(&name, price))
                .await
                .map_err(|e| call_failed("put_items", e))?;
            if cli.json {
                print_json(&text)?;
            } else {
                println!("{}", text);
            }
        }
        Commands::AddItem {
            menu_id,
            name,
            price,
        } => {
            let added = client
                .post_items_by_menu_id(menu_id, item(&name, price))
                .await
                .map_err(|e| call_failed("post_items_by_menu_id", e))?;
            if cli.json {
                print_json(&added)?;
            } else {
                println!("{}", format_item(&added));
            }
        }
        Commands::Menus => {
            let menu = client
                .get_menus()
                .await
                .map_err(|e| call_failed("get_menus", e))?;
            if cli.json {
                print_json(&menu)?;
            } else {
                println!("{}", format_menu(&menu));
            }
        }
        Commands::Menu { id } => {
            let menu = client
                .get_menu_by_id(id)
                .await
                .map_err(|e| call_failed("get_menu_by_id", e))?;
            if cli.json {
                print_json(&menu)?;
            } else {
                println!("{}", format_menu(&menu));
            }
        }
        Commands::DeleteMenu { id, quiet } => {
            let text = client
                .delete_menus_by_id(id, quiet)
                .await
                .map_err(|e| call_failed("delete_menus_by_id", e))?;
            if cli.json {
                print_json(&text)?;
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
