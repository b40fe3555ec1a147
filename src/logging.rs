//! Logging
//!
//! Routes `tracing` events to the browser console through `tracing-wasm`,
//! filtered by the configured `EnvFilter` directives.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Fallback when the configured directives do not parse
const DEFAULT_FILTER: &str = "info";

/// Build the filter for the console layer
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the console subscriber. Safe to call more than once.
pub fn init(directives: &str) {
    // Skip the performance-timeline marks; the console output is enough
    let config = WASMLayerConfigBuilder::new()
        .set_report_logs_in_timings(false)
        .build();

    let _ = tracing_subscriber::registry()
        .with(filter(directives))
        .with(WASMLayer::new(config))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_is_kept() {
        assert_eq!(filter("glucovision_ui=debug").to_string(), "glucovision_ui=debug");
    }
}
