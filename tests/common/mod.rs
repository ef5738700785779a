use std::sync::Once;

static INIT: Once = Once::new();

/// Route plotter logs to the test output; set `RUST_LOG=pcbplot=debug` and
/// build with `--features tracing` to see them.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::WARN.into()),
            )
            .with_test_writer()
            .try_init();
    });
}
