//! Log output for the binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a plain-text subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Lines carry no timestamp unless `with_time` is set.
pub fn init_tracing(with_time: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    if with_time {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
