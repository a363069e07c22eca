use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialises a coloured stderr logger. Unknown levels fall back to `info`.
pub fn init(level: &str) {
    env_logger::builder()
        .filter_level(level_filter(level))
        .format(|buf, record| {
            let timestamp = buf.timestamp_seconds();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Rgb(100, 200, 255)),
                Level::Trace => style.set_color(Color::Rgb(255, 100, 255)),
            };

            writeln!(
                buf,
                "{} | {} | {} | {}",
                timestamp,
                format_args!("{:^5}", style.value(record.level())),
                format_args!("{:^20}", record.target()),
                record.args(),
            )
        })
        .init()
}

pub(crate) fn level_filter(level: &str) -> LevelFilter {
    match level {
        "info" | "INFO" => LevelFilter::Info,
        "debug" | "DEBUG" => LevelFilter::Debug,
        "trace" | "TRACE" => LevelFilter::Trace,
        "error" | "ERROR" => LevelFilter::Error,
        "warn" | "WARN" => LevelFilter::Warn,
        "off" | "OFF" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("loud"), LevelFilter::Info);
    }
}
