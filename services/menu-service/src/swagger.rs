// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Swagger UI page for browsing the menu API.
//!
//! The page pulls `swagger-ui-dist` 5.x from jsdelivr and renders the
//! document this service serves at [`OPENAPI_PATH`](crate::config::OPENAPI_PATH).

/// Where the Swagger UI bundle and stylesheet are loaded from
const SWAGGER_UI_DIST: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5";

/// Content-Security-Policy sent with the page
///
/// Remote script and style are limited to the pinned `swagger-ui-dist`
/// package; the document itself is fetched from this service.
pub const SWAGGER_UI_CSP: &str = "default-src 'none'; \
    connect-src 'self'; \
    script-src 'unsafe-inline' https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/; \
    style-src 'unsafe-inline' https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/; \
    img-src 'self' data:";

/// Render the Swagger UI page for the document at `document_url`
pub fn swagger_ui_page(document_url: &str, title: &str) -> String {
    let mut page = String::with_capacity(1024);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\">\n");
    page.push_str(&format!("  <title>{}</title>\n", title));
    page.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}/swagger-ui.css\">\n",
        SWAGGER_UI_DIST
    ));
    page.push_str("</head>\n<body>\n  <main id=\"menu-api-docs\"></main>\n");
    page.push_str(&format!(
        "  <script src=\"{}/swagger-ui-bundle.js\"></script>\n",
        SWAGGER_UI_DIST
    ));
    page.push_str(&format!(
        "  <script>\n    SwaggerUIBundle({{ url: '{}', dom_id: '#menu-api-docs', tryItOutEnabled: true }});\n  </script>\n",
        document_url
    ));
    page.push_str("</body>\n</html>\n");
    page
}
