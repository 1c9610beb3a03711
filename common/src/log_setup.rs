use std::sync::OnceLock;

use flexi_logger::{detailed_format, FlexiLoggerError, Logger, LoggerHandle};

static TEST_LOGGER: OnceLock<Option<LoggerHandle>> = OnceLock::new();

/// Starts a stdout logger filtered by `RUST_LOG`, falling back to `base_level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup_logging(base_level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(base_level)?
        .log_to_stdout()
        .format(detailed_format)
        .start()
}

/// Starts a `debug` logger once per process. Later calls, and calls made after
/// another logger was installed, are ignored.
pub fn init_test_logging() {
    TEST_LOGGER.get_or_init(|| setup_logging("debug").ok());
}
