use core::fmt;

use log::{Record, Level, Metadata};
use log::{SetLoggerError, LevelFilter};

#[cfg(feature = "verbose")]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(feature = "verbose"))]
const LOG_LEVEL: Level = Level::Info;

struct SimpleLogger;

/// `[I][module] message`, newline terminated.
pub fn write_record<W: fmt::Write>(w: &mut W, record: &Record) -> fmt::Result {
  let tag = match record.level() {
    Level::Error => "[E]",
    Level::Warn => "[W]",
    Level::Info => "[I]",
    Level::Debug => "[D]",
    Level::Trace => "[T]",
  };
  w.write_str(tag)?;
  if let Some(m) = record.module_path() {
    write!(w, "[{}]", m)?;
  }
  writeln!(w, " {}", record.args())
}

impl log::Log for SimpleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= LOG_LEVEL
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      // Whole line under one console lock.
      let mut console = crate::driver::uart::console();
      let _ = write_record(&mut *console, record);
    }
  }

  fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

pub fn init() -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER)
    .map(|()| log::set_max_level(LevelFilter::Trace))
}
