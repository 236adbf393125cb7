//! Logging setup, adapted from the teacher engine's own `helpers::init_logging`.

use std::str::FromStr;

/// Initializes `env_logger` with a default filter-level of `warn`, raised to `max_log_level` for
/// this crate and any additional `modules`. `RUST_LOG`/`RUST_LOG_STYLE` take precedence.
pub fn init_logging(max_log_level: &str, mut modules: Vec<&str>) -> Result<(), String> {
    let mut builder = env_logger::Builder::new();
    builder.filter(None, log::LevelFilter::Warn);

    let max_log_level = log::LevelFilter::from_str(&max_log_level.to_ascii_uppercase())
        .ok()
        .ok_or_else(|| format!("The provided max-log-level {} is not supported.", max_log_level))?;
    modules.push(env!("CARGO_PKG_NAME"));
    for module in modules {
        builder.filter(Some(module), max_log_level);
    }

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if let Ok(write_style) = std::env::var("RUST_LOG_STYLE") {
        builder.parse_write_style(&write_style);
    }

    builder.init();
    Ok(())
}
