//! Reverse proxying to the upstream API origin.
//!
//! # Responsibilities
//! - Parse the backend origin once at startup
//! - Rewrite matched requests to the origin, preserving path/query/method/body
//! - Strip hop-by-hop headers in both directions
//! - Stream the upstream response back to the caller
//!
//! # Design Decisions
//! - One shared pooled client in handler state; no per-request clients
//! - Upstream HTTP errors are relayed verbatim; only transport failures
//!   map to 502 Bad Gateway
//! - No retries: a failed upstream call fails that request only

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{
        header,
        uri::{Authority, PathAndQuery, Scheme},
        HeaderMap, HeaderValue, Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::net::SocketAddr;

/// Header name for forwarded-for.
const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Hop-by-hop headers that must not be forwarded (RFC 7230 §6.1).
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Error type for backend origin parsing.
#[derive(Debug)]
pub enum OriginError {
    /// The string is not a syntactically valid URI.
    Invalid(String),
    /// The URI has no scheme.
    MissingScheme,
    /// The URI has no host.
    MissingHost,
}

impl std::fmt::Display for OriginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginError::Invalid(reason) => write!(f, "not a valid URI: {}", reason),
            OriginError::MissingScheme => write!(f, "missing scheme"),
            OriginError::MissingHost => write!(f, "missing host"),
        }
    }
}

impl std::error::Error for OriginError {}

/// The single upstream origin all `/api` traffic is forwarded to.
///
/// Parsed once at startup and immutable for the process lifetime. Any
/// path or query on the configured URL is ignored.
#[derive(Debug, Clone)]
pub struct BackendOrigin {
    scheme: Scheme,
    authority: Authority,
}

impl BackendOrigin {
    /// Parse an absolute URL into a backend origin.
    pub fn parse(url: &str) -> Result<Self, OriginError> {
        let uri: Uri = url
            .parse()
            .map_err(|e: axum::http::uri::InvalidUri| OriginError::Invalid(e.to_string()))?;

        let parts = uri.into_parts();
        let scheme = parts.scheme.ok_or(OriginError::MissingScheme)?;
        let authority = parts.authority.ok_or(OriginError::MissingHost)?;

        Ok(Self { scheme, authority })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}

impl std::fmt::Display for BackendOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}

/// Handler state for the proxy: shared client + fixed origin.
#[derive(Clone)]
pub struct ProxyState {
    client: Client<HttpConnector, Body>,
    origin: BackendOrigin,
}

impl ProxyState {
    /// Create proxy state with a pooled HTTP client for the given origin.
    pub fn new(origin: BackendOrigin) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, origin }
    }
}

/// Forward an `/api` request to the backend origin.
///
/// Preserves method, path, query, headers and body; only scheme and
/// authority are rewritten. The upstream response is streamed back
/// without buffering.
pub async fn forward(
    State(state): State<ProxyState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::info!(method = %method, path = %path, "API proxy");

    let (mut parts, body) = request.into_parts();
    strip_hop_by_hop(&mut parts.headers);
    append_forwarded_for(&mut parts.headers, client_addr);
    parts.uri = rewrite_uri(&parts.uri, &state.origin);

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (mut parts, body) = response.into_parts();
            strip_hop_by_hop(&mut parts.headers);
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(
                method = %method,
                path = %path,
                backend = %state.origin,
                error = %e,
                "Upstream request failed"
            );
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

/// Rewrite a request URI to target the backend origin.
///
/// Path and query are kept as-is; only scheme and authority change.
fn rewrite_uri(uri: &Uri, origin: &BackendOrigin) -> Uri {
    let mut parts = uri.clone().into_parts();
    parts.scheme = Some(origin.scheme.clone());
    parts.authority = Some(origin.authority.clone());
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    Uri::from_parts(parts).unwrap_or_else(|_| uri.clone())
}

/// Remove hop-by-hop headers: the static RFC 7230 set plus anything
/// named in the Connection header.
fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let connection_named: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    for name in connection_named {
        headers.remove(name.as_str());
    }
    for name in HOP_BY_HOP_HEADERS {
        headers.remove(name);
    }
}

/// Append the client address to X-Forwarded-For.
fn append_forwarded_for(headers: &mut HeaderMap, client: SocketAddr) {
    let ip = client.ip().to_string();
    let value = match headers.get(X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
        Some(existing) => format!("{}, {}", existing, ip),
        None => ip,
    };
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(X_FORWARDED_FOR, value);
    }
}
