//! Resolve command: print the absolute URL for a fragment.

use relikt_core::url_resolver::{TracingObserver, UrlResolver};

/// Resolve and print; an empty fragment prints an empty line, matching the
/// resolver's short-circuit contract.
pub fn run_resolve(resolver: &UrlResolver, fragment: &str) {
    let url = resolver.resolve_observed(fragment, &TracingObserver);
    println!("{}", url);
}
