//! Typed catalog commands: product, category, size, related.

use anyhow::Result;
use relikt_core::catalog::{self, RelatedKind};
use relikt_core::url_resolver::UrlResolver;

use super::get::parse_params;

pub fn run_product(resolver: &UrlResolver, id: i64) -> Result<()> {
    let product = catalog::product(resolver, id)?;
    println!("{}", serde_json::to_string_pretty(&product)?);
    if let Some(photo) = product.main_photo() {
        println!("main photo: {}", resolver.resolve(&photo.photo));
    }
    Ok(())
}

pub fn run_products(resolver: &UrlResolver, raw_params: &[String]) -> Result<()> {
    let parsed = parse_params(raw_params)?;
    let params: Vec<(&str, &str)> = parsed
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let listing = catalog::products(resolver, &params)?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

pub fn run_category(resolver: &UrlResolver, id: i64, with_sizes: bool) -> Result<()> {
    let cat = catalog::category(resolver, id)?;
    println!("{}", serde_json::to_string_pretty(&cat)?);
    if with_sizes {
        let sizes = catalog::allowed_sizes(resolver, &cat);
        println!("{}", serde_json::to_string_pretty(&sizes)?);
    }
    Ok(())
}

pub fn run_size(resolver: &UrlResolver, id: i64) -> Result<()> {
    let size = catalog::size(resolver, id)?;
    println!("{}", serde_json::to_string_pretty(&size)?);
    Ok(())
}

pub fn run_related(resolver: &UrlResolver, kind: &str) -> Result<()> {
    let kind: RelatedKind = kind.parse().map_err(anyhow::Error::msg)?;
    let options = catalog::related_list(resolver, kind)?;
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
