// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// File persistence for log records. Each (UTC day, level) pair owns one
// append-only file inside the log directory. Lines are plain text and carry a
// fixed-zone timestamp, the process id, the logger name and the level.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use chrono::{DateTime, Duration, Utc};
use crate::constants::{FILE_DATE_FORMAT, FILE_TIME_FORMAT, FILE_UTC_OFFSET_SECS};
use crate::error::LoggerError;
use crate::style::Level;

// Serializes appends from every logger in the process.
static APPEND_LOCK: Mutex<()> = Mutex::new(());

/// Creates the log directory and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<(), LoggerError> {
	fs::create_dir_all(path).map_err(|source| LoggerError::CreateLogDir {
		path: path.to_path_buf(),
		source,
	})
}

/// `<YYYY-MM-DD>-<level>.log`, dated by the UTC calendar day.
pub fn file_name(now: DateTime<Utc>, level: Level) -> String {
	format!("{}-{}.log", now.format(FILE_DATE_FORMAT), level.file_stem())
}

pub fn file_path(dir: &Path, now: DateTime<Utc>, level: Level) -> PathBuf {
	dir.join(file_name(now, level))
}

/// Timestamp written inside a record, always in the fixed file zone.
pub fn record_timestamp(now: DateTime<Utc>) -> String {
	let local = now.naive_utc() + Duration::seconds(i64::from(FILE_UTC_OFFSET_SECS));
	local.format(FILE_TIME_FORMAT).to_string()
}

/// `[<timestamp>] [<pid>] [<name>] [<LEVEL>] <message>\n`
pub fn format_record(now: DateTime<Utc>, pid: u32, name: &str, level: Level, message: &str) -> String {
	format!("[{}] [{}] [{}] [{}] {}\n", record_timestamp(now), pid, name, level, message)
}

/// Appends one record to the day/level file, creating the file if absent.
/// Returns the path that was written.
pub fn append_record(dir: &Path, now: DateTime<Utc>, name: &str, level: Level, message: &str) -> io::Result<PathBuf> {
	let path = file_path(dir, now, level);
	let line = format_record(now, std::process::id(), name, level, message);

	// A poisoned lock only means another append panicked; the file is still fine.
	let _guard = APPEND_LOCK.lock().unwrap_or_else(|e| e.into_inner());
	let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
	file.write_all(line.as_bytes())?;
	Ok(path)
}
