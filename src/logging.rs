use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Append-only log file shared by every run.
pub const LOG_PATH: &str = "/tmp/text-corrector.log";

/// Route the `log` macros into `path`, one timestamped line per record.
/// `RUST_LOG` can override the default `info` filter.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(&Local::now(), record.level(), record.args())
            )
        })
        .try_init()
        .map_err(io::Error::other)
}

/// `2024-05-01 09:30:12,045 [INFO] message`
fn format_line(now: &DateTime<Local>, level: Level, message: impl std::fmt::Display) -> String {
    format!("{} [{level}] {message}", now.format("%Y-%m-%d %H:%M:%S,%3f"))
}
