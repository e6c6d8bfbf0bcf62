//! Tracing subscriber setup for the binary.

use tracing_subscriber::filter::{self, EnvFilter};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{prelude::*, registry};

/// Installs the global subscriber.
///
/// Level defaults to `info` and can be overridden with `RUST_LOG`. Events go
/// to stderr so stdout carries only the report.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter::LevelFilter::INFO.into())
        .from_env_lossy();

    let fmt_layer = layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    registry().with(fmt_layer).init();
}
