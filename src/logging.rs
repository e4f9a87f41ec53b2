//! # Logging Setup
//!
//! The library only uses the `log` macros. The host binary installs
//! `env_logger` once at startup through [`init_logging`], with the filter taken
//! from the `[logging]` section of `clockface.toml`.
//!
//! ## Filter Precedence
//! 1. `logging.filter` from the config file
//! 2. the `RUST_LOG` environment variable
//! 3. `info`

use crate::config::LoggingSection;
use env_logger::{Builder, WriteStyle};
use std::sync::Once;

const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Filter directives for `section`, falling back to `RUST_LOG` and then
/// [`DEFAULT_FILTER`].
pub fn filter_directives(section: &LoggingSection, rust_log: Option<String>) -> String {
    section
        .filter
        .clone()
        .filter(|filter| !filter.trim().is_empty())
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(section: &LoggingSection) {
    let directives = filter_directives(section, std::env::var("RUST_LOG").ok());

    INIT.call_once(|| {
        let installed = Builder::new()
            .parse_filters(&directives)
            .write_style(WriteStyle::Auto)
            .format_timestamp_millis()
            .try_init();

        // A test harness may own the logger already.
        if installed.is_ok() {
            log::debug!("logging initialized with {:?}", directives);
        }
    });
}
