//! Process-wide logger setup.
//!
//! The library only emits through the `log` facade. Embedding applications
//! that have no logger of their own can install `env_logger` here.

use std::fs::OpenOptions;
use std::sync::Once;

use crate::config::LoggingConfig;
use crate::error::{SentinelError, SentinelResult};

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` configured from `config`.
///
/// Only the first call in a process has any effect; later calls return
/// `Ok(())`.
///
/// # Errors
/// `Io` if the log file cannot be opened, `Logging` if another logger was
/// installed first.
pub fn init_logging(config: &LoggingConfig) -> SentinelResult<()> {
    let target = match &config.log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    let mut result = Ok(());
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.is_test(false);
        builder.filter_level(config.level.into());

        if config.compact {
            builder.format(|buf, record| {
                use std::io::Write;
                writeln!(buf, "[{}] {}", record.level(), record.args())
            });
        }

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        if let Err(e) = builder.try_init() {
            result = Err(SentinelError::Logging(e.to_string()));
        }
    });

    result
}
