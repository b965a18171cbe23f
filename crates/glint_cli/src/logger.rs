use log::LevelFilter;

/// Initialize the logger. `level` replaces the global level from
/// `RUST_LOG`; per-module directives there still apply.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
