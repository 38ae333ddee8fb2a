//! Thin JSON GET wrapper over the URL resolver.
//!
//! One blocking request per call via libcurl, no retry, no caching. Errors
//! propagate to the caller unchanged; the caller decides user-visible
//! behaviour.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::query;
use crate::url_resolver::UrlResolver;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_TRANSFER_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a single GET. No sub-classification beyond these variants and
/// no retry decisions are made here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The path fragment was empty, so no URL could be built.
    #[error("empty path fragment, no URL to fetch")]
    EmptyPath,
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { code: u32, url: String },
    /// Response body was not the expected JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// GET a fragment and parse the body as an untyped JSON value.
pub fn get_json(
    resolver: &UrlResolver,
    fragment: &str,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, FetchError> {
    get_json_with_timeout(resolver, fragment, params, DEFAULT_TRANSFER_TIMEOUT)
}

/// [`get_json`] with an explicit transfer timeout (config-overridable).
pub fn get_json_with_timeout(
    resolver: &UrlResolver,
    fragment: &str,
    params: &[(&str, &str)],
    transfer_timeout: Duration,
) -> Result<serde_json::Value, FetchError> {
    let (url, body) = fetch_bytes(resolver, fragment, params, transfer_timeout)?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Json { url, source })
}

/// GET a fragment and decode the body into `T`.
pub fn get<T: DeserializeOwned>(
    resolver: &UrlResolver,
    fragment: &str,
    params: &[(&str, &str)],
) -> Result<T, FetchError> {
    let (url, body) = fetch_bytes(resolver, fragment, params, DEFAULT_TRANSFER_TIMEOUT)?;
    serde_json::from_slice(&body).map_err(|source| FetchError::Json { url, source })
}

/// Resolve, append the query string, perform one GET, return (url, body).
fn fetch_bytes(
    resolver: &UrlResolver,
    fragment: &str,
    params: &[(&str, &str)],
    transfer_timeout: Duration,
) -> Result<(String, Vec<u8>), FetchError> {
    let resolved = resolver.resolve(fragment);
    if resolved.is_empty() {
        return Err(FetchError::EmptyPath);
    }
    let url = query::append_query(&resolved, params);
    tracing::debug!("GET {}", url);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(transfer_timeout)?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http { code, url });
    }

    Ok((url, body))
}
