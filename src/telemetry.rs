// 📡 Telemetry - tracing subscriber setup shared by both binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to this crate.
/// Logs go to stderr so JSON on stdout stays clean. Calling twice is a no-op.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("numerology_engine={0},numerology={0},numerology_server={0}", default_level)));

    let _ = Registry::default()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
