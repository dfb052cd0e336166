use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Filters for the course table binary. Loader and session summaries log at
/// `info`; the per-insert and per-remove `debug!` lines in the container stay
/// quiet unless `RUST_LOG` asks for them.
fn course_logger() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("course_table", LevelFilter::Info)
        .filter_module("course_table::container", LevelFilter::Warn)
        .filter_module("rustyline", LevelFilter::Warn)
        .format_timestamp_millis();
    builder
}

pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = course_logger();
        builder.parse_default_env();

        // A test harness may already have installed a logger.
        let _ = builder.try_init();
    });
}
