use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops so tests can set it up independently.
pub fn start_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
