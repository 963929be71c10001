use env_logger::{Builder, Env};

/// Bootstraps logging for the process.
///
/// The default filter is `info`, `RUST_LOG` takes precedence when it is set.
pub fn bootstrap_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
