use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the crate and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every rejected host name when running with the `tracing`
/// feature enabled:
///   RUST_LOG=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
