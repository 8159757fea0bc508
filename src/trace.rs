//! Log output for the host binary.

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// Thread names are shown because the ingestion thread logs alongside the frame loop.
/// Call once, from the binary only.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fly_avatar=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_names(true)
                .with_file(false)
                .with_line_number(false)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .init();
}
