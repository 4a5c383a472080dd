use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{GutterError, Result};

struct FileLogger {
    file_path: PathBuf,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Append `debug` and more severe records to the file at `path`.
///
/// Layout code logs cache invalidations at `debug` and constant
/// recomputation at `trace`; use [`init_logger_with_level`] to see the latter.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    init_logger_with_level(path, LevelFilter::Debug)
}

pub fn init_logger_with_level(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let file_path = path.as_ref().to_path_buf();
    // Open once up front so a bad path is reported here, not swallowed later.
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)?;

    let logger = FileLogger {
        file_path,
        level: level.to_level().unwrap_or(Level::Error),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|_| GutterError::LoggerAlreadySet)?;
    log::set_max_level(level);
    Ok(())
}
