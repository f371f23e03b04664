//! Tracing subscriber installation for embedding hosts.
//!
//! The pipeline crates only emit `tracing` events; nothing here runs
//! unless the host opts in. `RUST_LOG` overrides the configured filter.

use thalamus_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber from the observability config.
///
/// Returns whether this call installed it; a host that already set a
/// global subscriber keeps its own and gets `false` back.
pub fn install_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_rejected() {
        let config = ObservabilityConfig::default();
        install_tracing(&config);
        assert!(!install_tracing(&config));
    }
}
