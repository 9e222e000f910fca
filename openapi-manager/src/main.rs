// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generates and checks the OpenAPI documents under `openapi-specs/generated`
//! from the API traits.
//!
//! ```bash
//! cargo run -p openapi-manager -- generate
//! cargo run -p openapi-manager -- check
//! ```

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use dropshot_api_manager::{Environment, ManagedApiConfig, ManagedApis};
use dropshot_api_manager_types::{ManagedApiMetadata, Versions};
use std::process::ExitCode;

fn environment() -> Result<Environment> {
    let workspace_root = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("openapi-manager has no parent directory")?
        .to_path_buf();

    let env = Environment::new(
        "cargo openapi".to_string(),
        workspace_root,
        "openapi-specs/generated",
    )?;
    Ok(env)
}

fn all_apis() -> Result<ManagedApis> {
    let menu_api = ManagedApiConfig {
        ident: "menu-api",
        versions: Versions::Lockstep {
            version: menu_api::MENU_API_VERSION,
        },
        title: menu_api::MENU_API_TITLE,
        metadata: ManagedApiMetadata {
            description: Some("Example API description."),
            ..Default::default()
        },
        api_description: menu_api::menu_api_mod::stub_api_description,
    };

    let managed_apis = ManagedApis::new(vec![menu_api])?;
    Ok(managed_apis)
}

fn main() -> Result<ExitCode> {
    let app = dropshot_api_manager::App::parse();
    let env = environment()?;
    let apis = all_apis()?;

    Ok(app.exec(&env, &apis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_api_registered() {
        assert!(all_apis().is_ok());
        assert!(environment().is_ok());
    }
}
