//! Get command: raw GET of a fragment with optional query parameters.

use anyhow::{bail, Result};
use relikt_core::config::ReliktConfig;
use relikt_core::fetch::{self, DEFAULT_TRANSFER_TIMEOUT};
use relikt_core::url_resolver::UrlResolver;
use std::time::Duration;

/// Perform one GET and pretty-print the JSON body.
pub fn run_get(
    resolver: &UrlResolver,
    cfg: &ReliktConfig,
    fragment: &str,
    raw_params: &[String],
) -> Result<()> {
    let parsed = parse_params(raw_params)?;
    let params: Vec<(&str, &str)> = parsed
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let timeout = cfg
        .request_timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TRANSFER_TIMEOUT);

    let value = fetch::get_json_with_timeout(resolver, fragment, &params, timeout)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Split repeatable `key=value` arguments.
pub(super) fn parse_params(raw: &[String]) -> Result<Vec<(String, String)>> {
    let mut out = Vec::with_capacity(raw.len());
    for item in raw {
        match item.split_once('=') {
            Some((k, v)) if !k.is_empty() => out.push((k.to_string(), v.to_string())),
            _ => bail!("invalid query parameter {:?}, expected KEY=VALUE", item),
        }
    }
    Ok(out)
}
