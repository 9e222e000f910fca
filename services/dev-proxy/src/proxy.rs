// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request forwarding

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use http::header::{HOST, ORIGIN};
use http::{HeaderValue, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tokio::net::TcpListener;

use crate::config::ProxyConfig;
use crate::error::ProxyError;

type HttpClient = Client<HttpConnector, Body>;

/// Strip `prefix` from the path of `path_and_query`
///
/// The prefix only matches on a segment boundary, so `/api` matches `/api`
/// and `/api/menus` but not `/apix`. The bare prefix maps to `/`. Any query
/// string is carried over unchanged. Returns `None` for paths outside the
/// prefix.
pub fn rewrite_path(prefix: &str, path_and_query: &str) -> Option<String> {
    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };

    let rest = path.strip_prefix(prefix)?;
    let rewritten = if rest.is_empty() {
        "/"
    } else if rest.starts_with('/') {
        rest
    } else {
        return None;
    };

    Some(match query {
        Some(query) => format!("{}?{}", rewritten, query),
        None => rewritten.to_string(),
    })
}

struct ProxyState {
    config: ProxyConfig,
    client: HttpClient,
    host: HeaderValue,
    origin: HeaderValue,
}

impl ProxyState {
    fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let host = config
            .target()
            .host_str()
            .map(|host| match config.target().port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            })
            .ok_or_else(|| ProxyError::InvalidConfig("target has no host".to_string()))?;
        let host = HeaderValue::from_str(&host)
            .map_err(|e| ProxyError::InvalidConfig(format!("invalid target host: {}", e)))?;
        let origin = HeaderValue::from_str(&config.target_origin())
            .map_err(|e| ProxyError::InvalidConfig(format!("invalid target origin: {}", e)))?;

        let client = Client::builder(TokioExecutor::new()).build_http();

        Ok(Self {
            config,
            client,
            host,
            origin,
        })
    }

    /// Rewrite the URI and headers of a request bound for the backend
    fn upstream_request(&self, mut req: Request) -> Result<Request, ProxyError> {
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let rewritten = rewrite_path(self.config.prefix(), path_and_query)
            .ok_or_else(|| ProxyError::NotProxied(req.uri().path().to_string()))?;

        let uri: Uri = format!("{}{}", self.config.target_base(), rewritten).parse()?;
        tracing::debug!(method = %req.method(), from = %req.uri(), to = %uri, "Forwarding request");

        *req.uri_mut() = uri;
        let headers = req.headers_mut();
        headers.insert(HOST, self.host.clone());
        if headers.contains_key(ORIGIN) {
            headers.insert(ORIGIN, self.origin.clone());
        }

        Ok(req)
    }
}

async fn forward(
    State(state): State<Arc<ProxyState>>,
    req: Request,
) -> Result<Response, ProxyError> {
    let req = state.upstream_request(req)?;
    let uri = req.uri().clone();

    let response = state.client.request(req).await.map_err(|e| {
        tracing::warn!(%uri, error = %e, "Backend request failed");
        ProxyError::from(e)
    })?;

    Ok(response.map(Body::new))
}

/// Build the proxy router; every request goes through the forwarding handler
pub fn router(config: ProxyConfig) -> Result<Router, ProxyError> {
    let state = Arc::new(ProxyState::new(config)?);
    Ok(Router::new().fallback(forward).with_state(state))
}

/// Serve the proxy on an already bound listener until the server fails
pub async fn serve(listener: TcpListener, config: ProxyConfig) -> anyhow::Result<()> {
    let app = router(config)?;
    axum::serve(listener, app).await?;
    Ok(())
}
