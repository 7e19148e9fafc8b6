//! Logger setup for the demo binary.

use std::env;

use log::LevelFilter;

/// Maps the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the logger: filters from `RUST_LOG` when it is set, otherwise a
/// single level derived from the `-v` count.
pub fn builder(rust_log: Option<&str>, verbosity: u8) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match rust_log {
        Some(filters) => builder.parse_filters(filters),
        None => builder.filter_level(level_for(verbosity)),
    };
    builder
}

/// Installs `env_logger`, letting `RUST_LOG` win over the `-v` count.
pub fn init_logger(verbosity: u8) {
    let rust_log = env::var("RUST_LOG").ok();
    builder(rust_log.as_deref(), verbosity).init();
}
