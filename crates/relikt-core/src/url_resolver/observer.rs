//! Optional diagnostic hooks for URL resolution.
//!
//! Resolution itself stays pure; callers that want the old
//! "log input, log output" behaviour inject an observer instead.

/// Callbacks invoked at the two fixed points of a resolution.
pub trait ResolveObserver {
    /// Called before resolution with the normalized origin and raw fragment.
    fn on_input(&self, origin: &str, fragment: &str);
    /// Called after resolution with the produced URL.
    fn on_output(&self, url: &str);
}

/// Observer that emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn on_input(&self, origin: &str, fragment: &str) {
        tracing::debug!("resolving {:?} against {}", fragment, origin);
    }

    fn on_output(&self, url: &str) {
        tracing::debug!("resolved to {:?}", url);
    }
}
