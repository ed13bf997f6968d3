//! Log output setup
//!
//! Installs an `env_logger` backend printing a coloured level, a bracketed
//! timestamp and the message. `RUST_LOG` takes precedence over the verbosity
//! given on the command line.

use std::io::Write;

use colored::Colorize;
use log::{Level, LevelFilter};

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn paint(level: Level) -> colored::ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red().bold(),
        Level::Warn => name.yellow().bold(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.dimmed(),
    }
}

/// Install the global logger; later calls are ignored
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                paint(record.level()),
                buf.timestamp_seconds(),
                record.args()
            )
        });
    // A logger may already be installed (tests, embedding binaries)
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
