// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

/// Installs the stderr logger. Call once, before any work is done.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Level for the -q / -v flags; quiet wins.
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
  if quiet {
    LevelFilter::Error
  } else if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  }
}

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Format: "🔴  File not found"
      let mut stderr = std::io::stderr().lock();
      for line in record.args().to_string().lines() {
        let _ = writeln!(stderr, "{}  {}", icon(record.level()), line);
      }
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
