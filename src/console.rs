/// Installs the global logger. `filter` uses the `env_logger` directive
/// syntax, e.g. `info` or `cornered_rot_lines::scheduler=debug`.
pub fn init(filter: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_filters(filter)
        .format_timestamp_millis();
    if builder.try_init().is_err() {
        log::warn!("logger already initialised");
    }
}
