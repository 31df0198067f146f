//! Logging setup for simulation runs.

/// Initialize tracing subscriber for logging. Safe to call more than once;
/// later calls are ignored.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
