// ══════════════════════════════════════════════════════════════════════════════
// CONSOLE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Where rendered terminal lines go. `StdConsole` writes to the real stdout and
// stderr; `MemoryConsole` keeps lines in memory for embedding and tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use crate::style::Stream;

pub trait Console: Send + Sync {
	fn write_line(&self, stream: Stream, line: &str);
}

/// Process stdout/stderr. A closed stream never panics the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
	fn write_line(&self, stream: Stream, line: &str) {
		let _ = match stream {
			Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
			Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
		};
	}
}

/// Collects every written line together with its stream.
#[derive(Debug, Default)]
pub struct MemoryConsole {
	lines: Mutex<Vec<(Stream, String)>>,
}

impl MemoryConsole {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lines(&self) -> Vec<(Stream, String)> {
		self.lines.lock().map(|l| l.clone()).unwrap_or_default()
	}

	/// Lines written to one stream, in order.
	pub fn stream(&self, stream: Stream) -> Vec<String> {
		self.lines()
			.into_iter()
			.filter(|(s, _)| *s == stream)
			.map(|(_, line)| line)
			.collect()
	}
}

impl Console for MemoryConsole {
	fn write_line(&self, stream: Stream, line: &str) {
		if let Ok(mut lines) = self.lines.lock() {
			lines.push((stream, line.to_string()));
		}
	}
}

impl<C: Console + ?Sized> Console for Arc<C> {
	fn write_line(&self, stream: Stream, line: &str) {
		(**self).write_line(stream, line);
	}
}
