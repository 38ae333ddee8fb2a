//! Backend URL resolution.
//!
//! Turns a caller-supplied path fragment into an absolute URL against the
//! configured backend origin. Two path conventions exist and are mutually
//! exclusive: API paths are routed under `/api/v1`, static assets (anything
//! containing a `static/` segment) are served directly from the origin.

mod normalize;
mod observer;

pub use observer::{ResolveObserver, TracingObserver};

use normalize::{collapse_slashes, ensure_trailing_slash, normalize_origin};

/// Fixed prefix all API-class paths are routed under.
pub const API_PREFIX: &str = "/api/v1";

/// Marker segment identifying a static-asset-class path.
pub const STATIC_MARKER: &str = "static/";

/// Classification of a path fragment (see [`classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Already absolute (`http://` or `https://`); returned unchanged.
    Absolute,
    /// Served directly from the origin's static file area.
    StaticAsset,
    /// Routed under the [`API_PREFIX`].
    Api,
}

/// Classify a path fragment by content.
pub fn classify(fragment: &str) -> PathClass {
    if fragment.starts_with("http://") || fragment.starts_with("https://") {
        PathClass::Absolute
    } else if fragment.contains(STATIC_MARKER) {
        PathClass::StaticAsset
    } else {
        PathClass::Api
    }
}

/// Resolves path fragments against a backend origin normalized once at
/// construction time.
///
/// Pure: no ambient state is read after `new`, and `resolve` has no side
/// effects. Diagnostic output goes through [`resolve_observed`] only.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    origin: String,
}

impl UrlResolver {
    /// Build a resolver for the given origin.
    ///
    /// The origin may arrive with or without a scheme and with any number of
    /// trailing slashes; an empty or slash-only origin falls back to
    /// `default_origin`.
    pub fn new(origin: &str, default_origin: &str) -> Self {
        Self {
            origin: normalize_origin(origin, default_origin),
        }
    }

    /// The normalized origin all fragments resolve against.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolve a path fragment to an absolute URL.
    ///
    /// Total over any string input. An empty fragment yields an empty string;
    /// an already-absolute fragment is returned unchanged (which makes the
    /// function idempotent on its own output).
    pub fn resolve(&self, fragment: &str) -> String {
        if fragment.is_empty() {
            return String::new();
        }

        match classify(fragment) {
            PathClass::Absolute => fragment.to_string(),
            PathClass::StaticAsset => {
                let mut path = with_leading_slash(fragment);
                // The two conventions are mutually exclusive; drop a stray
                // API prefix rather than produce a path the backend cannot
                // serve.
                if let Some(stripped) = strip_api_prefix(&path) {
                    path = stripped;
                }
                format!("{}{}", self.origin, collapse_slashes(&path))
            }
            PathClass::Api => {
                let mut path = with_leading_slash(fragment);
                if !path.contains("api/v1") {
                    path = format!("{}{}", API_PREFIX, path);
                }
                let path = collapse_slashes(&path);
                // The backend redirects prefix paths missing a trailing
                // slash; on a cross-origin request that redirect breaks the
                // caller's CORS expectations, so the slash is enforced here.
                format!("{}{}", self.origin, ensure_trailing_slash(&path))
            }
        }
    }

    /// Resolve with diagnostic callbacks at the two fixed points: input
    /// received and output produced.
    pub fn resolve_observed(&self, fragment: &str, observer: &dyn ResolveObserver) -> String {
        observer.on_input(&self.origin, fragment);
        let url = self.resolve(fragment);
        observer.on_output(&url);
        url
    }
}

fn with_leading_slash(fragment: &str) -> String {
    if fragment.starts_with('/') {
        fragment.to_string()
    } else {
        format!("/{}", fragment)
    }
}

/// Remove one `/api/v1` marker from a path, if present.
fn strip_api_prefix(path: &str) -> Option<String> {
    path.find(API_PREFIX)
        .map(|i| format!("{}{}", &path[..i], &path[i + API_PREFIX.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "https://reliktarte-production.up.railway.app";

    fn resolver(origin: &str) -> UrlResolver {
        UrlResolver::new(origin, DEFAULT)
    }

    #[test]
    fn empty_fragment_short_circuits() {
        assert_eq!(resolver("https://host").resolve(""), "");
    }

    #[test]
    fn absolute_fragment_unchanged() {
        let r = resolver("https://host");
        assert_eq!(r.resolve("http://other.host/x"), "http://other.host/x");
        assert_eq!(r.resolve("https://other.host/x"), "https://other.host/x");
    }

    #[test]
    fn api_fragment_gets_prefix_and_trailing_slash() {
        let r = resolver("https://host");
        assert_eq!(r.resolve("product/5"), "https://host/api/v1/product/5/");
        assert_eq!(r.resolve("/product/5"), "https://host/api/v1/product/5/");
    }

    #[test]
    fn api_fragment_with_existing_prefix_not_doubled() {
        let r = resolver("https://host");
        assert_eq!(
            r.resolve("api/v1/product/5"),
            "https://host/api/v1/product/5/"
        );
        assert_eq!(
            r.resolve("/api/v1/product/5/"),
            "https://host/api/v1/product/5/"
        );
    }

    #[test]
    fn api_fragment_with_query_gets_slash_before_question_mark() {
        let r = resolver("https://host");
        assert_eq!(
            r.resolve("product?color=2"),
            "https://host/api/v1/product/?color=2"
        );
        assert_eq!(
            r.resolve("product/?color=2"),
            "https://host/api/v1/product/?color=2"
        );
    }

    #[test]
    fn static_fragment_bypasses_api_prefix() {
        let r = resolver("https://host");
        assert_eq!(
            r.resolve("static/img/x.png"),
            "https://host/static/img/x.png"
        );
        assert_eq!(
            r.resolve("/static/catalog/door/a/b/1.webp"),
            "https://host/static/catalog/door/a/b/1.webp"
        );
    }

    #[test]
    fn static_fragment_with_stray_api_prefix_stripped() {
        let r = resolver("https://host");
        assert_eq!(
            r.resolve("/api/v1/static/img/x.png"),
            "https://host/static/img/x.png"
        );
        assert_eq!(
            r.resolve("api/v1/static/img/x.png"),
            "https://host/static/img/x.png"
        );
    }

    #[test]
    fn static_fragment_keeps_trailing_shape() {
        // No trailing slash is forced on static assets.
        let r = resolver("https://host");
        assert_eq!(r.resolve("static/img/"), "https://host/static/img/");
        assert_eq!(r.resolve("static/img"), "https://host/static/img");
    }

    #[test]
    fn doubled_slashes_collapse_outside_scheme() {
        let r = resolver("https://host");
        assert_eq!(
            r.resolve("//product//5//"),
            "https://host/api/v1/product/5/"
        );
        assert_eq!(
            r.resolve("static//img///x.png"),
            "https://host/static/img/x.png"
        );
    }

    #[test]
    fn origin_without_scheme_gets_https() {
        let r = resolver("host.example.com");
        assert_eq!(r.origin(), "https://host.example.com");
        assert_eq!(r.resolve("product/5"), "https://host.example.com/api/v1/product/5/");
    }

    #[test]
    fn origin_trailing_slashes_stripped() {
        let r = resolver("https://host///");
        assert_eq!(r.resolve("product/5"), "https://host/api/v1/product/5/");
    }

    #[test]
    fn http_origin_kept() {
        // Final policy: never rewrite an explicit scheme on the origin.
        let r = resolver("http://localhost:8000");
        assert_eq!(r.resolve("product/5"), "http://localhost:8000/api/v1/product/5/");
    }

    #[test]
    fn empty_origin_falls_back_to_default() {
        let r = resolver("");
        assert_eq!(r.origin(), DEFAULT);
        let r = resolver("///");
        assert_eq!(r.origin(), DEFAULT);
    }

    #[test]
    fn idempotent_on_own_output() {
        let r = resolver("https://host");
        for fragment in [
            "product/5",
            "product?color=2",
            "static/img/x.png",
            "api/v1/product/size/3",
        ] {
            let once = r.resolve(fragment);
            assert_eq!(r.resolve(&once), once);
        }
    }

    #[test]
    fn no_doubled_slash_outside_scheme_separator() {
        let r = resolver("https://host");
        for fragment in [
            "product//5",
            "//a//b//c",
            "static///x/y.png",
            "api/v1//product/",
            "weird///path?x=//1",
        ] {
            let url = r.resolve(fragment);
            let after_scheme = &url["https://".len()..];
            assert!(
                !after_scheme.contains("//"),
                "doubled slash in {url}"
            );
            assert!(url.starts_with("https://host/"));
        }
    }

    #[test]
    fn classify_covers_all_conventions() {
        assert_eq!(classify("https://x/y"), PathClass::Absolute);
        assert_eq!(classify("static/a.png"), PathClass::StaticAsset);
        assert_eq!(classify("product/1"), PathClass::Api);
    }
}
