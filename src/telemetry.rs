use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so diagnostics never interleave with the menu on stdout.
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("desk opened");
/// ```
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
