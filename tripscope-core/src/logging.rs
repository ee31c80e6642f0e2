use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// Diagnostics go to stderr so they never interleave with the prompts and
/// reports on stdout. The default level is `warn` to keep interactive
/// sessions quiet; override with `RUST_LOG` (e.g. `RUST_LOG=tripscope_core=debug`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
