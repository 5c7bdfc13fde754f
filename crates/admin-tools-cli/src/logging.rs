//! Logger setup for the `admintools` binary.
//!
//! Log records go to stderr so that stdout carries only command output.

use log::LevelFilter;
use std::env;

/// Install the global logger.
///
/// `--debug` forces debug level. Otherwise `RUST_LOG` is honoured when set,
/// and warnings-only is the fallback.
pub fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else if env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new().filter_level(level).init();
}
