//! Subscriber installation is first-wins and never panics.

use datamapper_core::config::ObservabilityConfig;
use datamapper_core::tracing::init_tracing;

#[test]
fn second_init_is_harmless() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
    };
    init_tracing(&config);
    assert!(!init_tracing(&config));
}
