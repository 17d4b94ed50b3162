use std::io;

use anyhow::Context;
use library_desk::{Library, Session, Settings, telemetry::setup_tracing};

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = Settings::load().context("invalid LIBRARY_* settings")?;
    let mut library = Library::from_settings(&settings).context("failed to build the catalog")?;
    tracing::info!(
        items = library.registry.len(),
        error_log = %settings.error_log.display(),
        "desk opened"
    );

    let stdin = io::stdin();
    Session::new(&mut library, stdin.lock(), io::stdout().lock(), io::stderr().lock())
        .run()
        .context("console I/O failed")?;
    Ok(())
}
