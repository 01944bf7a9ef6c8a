//! Logger bootstrap.
//!
//! Library code only talks to the `log` facade, using `event=... module=...
//! status=...` key-value messages. Clients that want output call
//! [`init_logging`] once; everything goes to stderr so stdout stays clean for
//! command output.
//!
//! The level defaults to `warn` (`debug` when verbose) and can be overridden
//! with `RUST_LOG`.

use crate::error::{RadarError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts the stderr logger. Later calls are no-ops.
pub fn init_logging(verbose: bool) -> Result<()> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle> {
        let handle = Logger::try_with_env_or_str(default_level(verbose))
            .map_err(|err| RadarError::Logging(err.to_string()))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| RadarError::Logging(err.to_string()))?;

        debug!(
            "event=logging_init module=logging status=ok level={} version={}",
            default_level(verbose),
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;
    Ok(())
}
