use tracing_subscriber::EnvFilter;

/// Initialize tracing. `RUST_LOG` overrides the default `info` level.
/// Idempotent so tests can call it freely.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}
