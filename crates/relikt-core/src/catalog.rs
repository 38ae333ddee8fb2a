//! Typed access to the storefront catalog endpoints.
//!
//! Field names follow the backend JSON; unknown fields are ignored and
//! optional ones tolerate absence, since the API shape is external.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::fetch::{self, FetchError};
use crate::url_resolver::UrlResolver;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub have_glass: bool,
    #[serde(default)]
    pub orientation_choice: bool,
    /// Free-form description rows as imported from the catalog documents.
    #[serde(default)]
    pub description: Option<serde_json::Value>,
    #[serde(default)]
    pub photos: Vec<ProductPhoto>,
}

impl Product {
    /// The main photo if one is flagged, otherwise the first.
    pub fn main_photo(&self) -> Option<&ProductPhoto> {
        self.photos
            .iter()
            .find(|p| p.is_main)
            .or_else(|| self.photos.first())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPhoto {
    #[serde(default)]
    pub id: Option<i64>,
    /// Static-asset path, e.g. `/static/catalog/door/<class>/<name>/1.webp`.
    /// Resolve it through the URL resolver to get a loadable URL.
    pub photo: String,
    #[serde(default)]
    pub is_main: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub allowed_sizes: Vec<i64>,
    #[serde(default)]
    pub is_glass_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSize {
    pub id: i64,
    pub dimensions: String,
    pub width: u32,
    pub height: u32,
}

/// Option of a related list (colors, glass colors): id + display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedOption {
    pub id: i64,
    pub name: String,
}

/// Related lists exposed by the backend under `product/related/{kind}/list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedKind {
    ProductColor,
    ProductGlassColor,
}

impl RelatedKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            RelatedKind::ProductColor => "product_color",
            RelatedKind::ProductGlassColor => "product_glass_color",
        }
    }
}

impl FromStr for RelatedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product_color" | "color" => Ok(RelatedKind::ProductColor),
            "product_glass_color" | "glass_color" => Ok(RelatedKind::ProductGlassColor),
            other => Err(format!("unknown related kind: {other}")),
        }
    }
}

/// Categories whose sizes come from the built-in table instead of the API.
pub const CATEGORIES_WITH_DEFAULT_SIZES: &[i64] = &[1]; // doors

/// Standard door sizes the storefront offers when the category carries none.
pub fn default_door_sizes() -> Vec<ProductSize> {
    [
        (1, 800, 2000),
        (2, 900, 2000),
        (3, 800, 2100),
        (4, 900, 2100),
    ]
    .iter()
    .map(|&(id, width, height)| ProductSize {
        id,
        dimensions: format!("{}x{}", height, width),
        width,
        height,
    })
    .collect()
}

pub fn product(resolver: &UrlResolver, id: i64) -> Result<Product, FetchError> {
    fetch::get(resolver, &format!("product/{id}"), &[])
}

/// Filtered product listing; filter semantics live server-side, so the result
/// stays untyped.
pub fn products(
    resolver: &UrlResolver,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, FetchError> {
    fetch::get_json(resolver, "product", params)
}

pub fn category(resolver: &UrlResolver, id: i64) -> Result<Category, FetchError> {
    fetch::get(resolver, &format!("product/category/{id}"), &[])
}

pub fn size(resolver: &UrlResolver, id: i64) -> Result<ProductSize, FetchError> {
    fetch::get(resolver, &format!("product/size/{id}"), &[])
}

pub fn related_list(
    resolver: &UrlResolver,
    kind: RelatedKind,
) -> Result<Vec<RelatedOption>, FetchError> {
    fetch::get(
        resolver,
        &format!("product/related/{}/list", kind.as_path()),
        &[],
    )
}

/// Sizes offered for a category: the built-in table for categories configured
/// to use it, otherwise one fetch per allowed id. Ids that fail to load are
/// skipped (the storefront renders whatever loaded).
pub fn allowed_sizes(resolver: &UrlResolver, cat: &Category) -> Vec<ProductSize> {
    if CATEGORIES_WITH_DEFAULT_SIZES.contains(&cat.id) {
        return default_door_sizes();
    }
    let mut sizes = Vec::with_capacity(cat.allowed_sizes.len());
    for &id in &cat.allowed_sizes {
        match size(resolver, id) {
            Ok(s) => sizes.push(s),
            Err(e) => tracing::warn!("skipping size {}: {}", id, e),
        }
    }
    sizes
}
