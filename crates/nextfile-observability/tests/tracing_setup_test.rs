use nextfile_core::config::ObservabilityConfig;
use nextfile_observability::tracing_setup::{self, spans::names};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json_logs: false,
    };
    let _ = tracing_setup::init(&config);
    assert!(
        !tracing_setup::init(&config),
        "second install must report an existing subscriber"
    );

    // Spans can be entered once a subscriber is installed.
    let span = nextfile_observability::persistence_span!("save");
    let _guard = span.enter();
    tracing::info!("inside persistence span");
}

#[test]
fn invalid_level_falls_back_without_panicking() {
    let config = ObservabilityConfig {
        log_level: "not a [valid] directive ===".to_string(),
        json_logs: true,
    };
    let filter = tracing_setup::env_filter(&config);
    assert!(!filter.to_string().is_empty());
}

#[test]
fn span_names_are_namespaced() {
    for name in [names::FILE_OPENED, names::FEATURES, names::PERSISTENCE] {
        assert!(name.starts_with("nextfile."));
    }
}
