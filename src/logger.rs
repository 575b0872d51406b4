// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped console logging with different severity levels,
// mirrored as plain text into per-day, per-level log files. Terminal output is
// the primary channel: a failing file write is reported and never blocks it.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::console::{Console, StdConsole};
use crate::context::ExecutionContext;
use crate::error::LoggerError;
use crate::io::{append_record, ensure_dir};
use crate::render;
use crate::style::{Level, Stream};

/// Anything that can be logged as one message. Multiple fragments are joined
/// with a single space.
pub trait IntoMessage {
	fn into_message(self) -> String;
}

impl IntoMessage for &str {
	fn into_message(self) -> String {
		self.to_string()
	}
}

impl IntoMessage for String {
	fn into_message(self) -> String {
		self
	}
}

impl IntoMessage for &String {
	fn into_message(self) -> String {
		self.clone()
	}
}

impl<T: AsRef<str>> IntoMessage for &[T] {
	fn into_message(self) -> String {
		self.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(" ")
	}
}

impl<T: AsRef<str>, const N: usize> IntoMessage for [T; N] {
	fn into_message(self) -> String {
		self.as_slice().into_message()
	}
}

impl<T: AsRef<str>> IntoMessage for Vec<T> {
	fn into_message(self) -> String {
		self.as_slice().into_message()
	}
}

/// A named source of log events. Name, directory and persistence mode are
/// fixed at construction, so one instance can be shared for the whole run.
pub struct Logger<C: Console = StdConsole> {
	name: String,
	log_dir: PathBuf,
	to_file: bool,
	console: C,
}

impl Logger<StdConsole> {
	/// Resolves the log directory from the current process.
	pub fn new(name: impl Into<String>, persist_to_file: bool) -> Result<Self, LoggerError> {
		let context = ExecutionContext::detect()?;
		Self::with_context(name, persist_to_file, &context)
	}

	pub fn with_context(name: impl Into<String>, persist_to_file: bool, context: &ExecutionContext) -> Result<Self, LoggerError> {
		Self::at_directory(name, persist_to_file, context.log_directory())
	}

	/// Uses `dir` as-is instead of resolving it.
	pub fn at_directory(name: impl Into<String>, persist_to_file: bool, dir: impl Into<PathBuf>) -> Result<Self, LoggerError> {
		Logger::with_console(name, persist_to_file, dir, StdConsole)
	}
}

impl<C: Console> Logger<C> {
	/// Creates the directory up front when persisting; failure is returned,
	/// never deferred to the first write.
	pub fn with_console(name: impl Into<String>, persist_to_file: bool, dir: impl Into<PathBuf>, console: C) -> Result<Self, LoggerError> {
		let log_dir = dir.into();
		if persist_to_file && !log_dir.is_dir() {
			ensure_dir(&log_dir)?;
		}
		Ok(Self {
			name: name.into(),
			log_dir,
			to_file: persist_to_file,
			console,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn log_directory(&self) -> &Path {
		&self.log_dir
	}

	pub fn file_logging_enabled(&self) -> bool {
		self.to_file
	}

	pub fn console(&self) -> &C {
		&self.console
	}

	pub fn debug(&self, message: impl IntoMessage) {
		self.log(Level::Debug, message.into_message());
	}

	pub fn success(&self, message: impl IntoMessage) {
		self.log(Level::Success, message.into_message());
	}

	pub fn info(&self, message: impl IntoMessage) {
		self.log(Level::Info, message.into_message());
	}

	pub fn warn(&self, message: impl IntoMessage) {
		self.log(Level::Warn, message.into_message());
	}

	pub fn error(&self, message: impl IntoMessage) {
		self.log(Level::Error, message.into_message());
	}

	/// Activity event without data.
	pub fn activity(&self, title: &str) {
		self.emit_activity(title, None);
	}

	/// Activity event with ordered key/value data.
	pub fn activity_with<K: AsRef<str>, V: Display>(&self, title: &str, data: &[(K, V)]) {
		let data = render::pairs_to_strings(data);
		self.emit_activity(title, Some(data.as_slice()));
	}

	/// Prints a full-width rule, with `title` centered when given.
	pub fn divider(&self, title: Option<&str>) {
		self.console.write_line(Stream::Stdout, &render::divider_line(title));
	}

	/// Prints a bordered block with a title row and one row per line.
	pub fn draw_box<S: AsRef<str>>(&self, title: &str, lines: &[S]) {
		for line in render::box_lines(title, lines) {
			self.console.write_line(Stream::Stdout, &line);
		}
	}

	fn log(&self, level: Level, message: String) {
		let line = render::level_line(&render::terminal_time(), &self.name, level, &message);
		self.console.write_line(level.stream(), &line);
		self.persist(level, &message);
	}

	fn emit_activity(&self, title: &str, data: Option<&[(String, String)]>) {
		let lines = render::activity_lines(&render::terminal_time(), &self.name, title, data);
		self.console.write_line(Level::Activity.stream(), &lines);
		self.persist(Level::Activity, &render::activity_message(title, data));
	}

	fn persist(&self, level: Level, message: &str) {
		if !self.to_file {
			return;
		}
		if let Err(e) = append_record(&self.log_dir, Utc::now(), &self.name, level, message) {
			self.console.write_line(Stream::Stderr, &format!("Failed to write to log file: {}", e));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fragments_join_with_space() {
		assert_eq!("one".into_message(), "one");
		assert_eq!(["failed", "to", "connect"].into_message(), "failed to connect");
		assert_eq!(vec!["a".to_string(), "b".to_string()].into_message(), "a b");
		let parts: &[&str] = &["x", "y"];
		assert_eq!(parts.into_message(), "x y");
	}

	#[test]
	fn test_empty_fragments_make_empty_message() {
		let parts: [&str; 0] = [];
		assert_eq!(parts.into_message(), "");
	}

	#[test]
	fn test_logger_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Logger>();
		assert_send_sync::<Logger<std::sync::Arc<crate::console::MemoryConsole>>>();
	}
}
