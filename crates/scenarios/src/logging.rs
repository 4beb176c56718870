use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

static INIT: Once = Once::new();

/// Initialize tracing for scenario runs. Idempotent, so every test can call
/// it without coordinating.
pub fn init_logging() {
    INIT.call_once(|| {
        // Allow RUST_LOG overrides, default to info
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // Log to stderr; keep formatting compact
        let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(stderr)
            .with_target(true)
            .with_level(true)
            .compact()
            .try_init();
    });
}
