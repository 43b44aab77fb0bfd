// src/logging.rs
//
// File-backed `log::Log` sink. Each line: `[hh:mm:ss.mmm][LEVEL] message`,
// elapsed since the logger was installed.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::LOG_FILE;

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { path: path.into(), level, lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn write_line(&self, line: &str) {
        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
            {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) { return; }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        self.write_line(&format!("[{elapsed}][{}] {}\n", record.level(), record.args()));
    }

    fn flush(&self) {}
}

/// Install the file logger at `.store/debug.log`. Safe to call more than once;
/// only the first call takes effect.
pub fn init(level: LevelFilter) {
    init_at(LOG_FILE, level)
}

pub fn init_at(path: impl Into<PathBuf>, level: LevelFilter) {
    let path = path.into();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    start();
    let logger = LOGGER.get_or_init(|| FileLogger::new(path, level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
    }

    #[test]
    fn logger_appends_formatted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let logger = FileLogger::new(&path, LevelFilter::Info);

        logger.log(&Record::builder()
            .args(format_args!("parsed {} teachers", 3))
            .level(log::Level::Info)
            .build());
        logger.log(&Record::builder()
            .args(format_args!("dropped"))
            .level(log::Level::Debug)
            .build());

        let text = fs::read_to_string(logger.path()).unwrap();
        assert!(text.contains("][INFO] parsed 3 teachers"));
        assert!(!text.contains("dropped"));
    }
}
