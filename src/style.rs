// ══════════════════════════════════════════════════════════════════════════════
// STYLE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Static style registry: every log level maps to a color, an icon and the
// terminal stream it is written to. Levels are a closed set, so every lookup
// is an exhaustive match and there is no "unknown level" path.

use std::fmt;
use colored::*;

/// Severity or kind of an emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
	Debug,
	Success,
	Info,
	Warn,
	Error,
	Activity,
}

/// Terminal stream a rendered line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
	Stdout,
	Stderr,
}

impl Level {
	pub const ALL: [Level; 6] = [
		Level::Debug,
		Level::Success,
		Level::Info,
		Level::Warn,
		Level::Error,
		Level::Activity,
	];

	/// Upper-case name used in terminal tags and file records.
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Debug => "DEBUG",
			Level::Success => "SUCCESS",
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
			Level::Activity => "ACTIVITY",
		}
	}

	/// Lower-case name used in log file names.
	pub fn file_stem(&self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Success => "success",
			Level::Info => "info",
			Level::Warn => "warn",
			Level::Error => "error",
			Level::Activity => "activity",
		}
	}

	pub fn icon(&self) -> &'static str {
		match self {
			Level::Debug => "🔍",
			Level::Success => "✅",
			Level::Info => "ℹ️",
			Level::Warn => "⚠️",
			Level::Error => "❌",
			Level::Activity => "⚡",
		}
	}

	/// Applies the level's color to `text`.
	pub fn paint(&self, text: &str) -> ColoredString {
		match self {
			Level::Debug => text.cyan(),
			Level::Success => text.green(),
			Level::Info => text.blue(),
			Level::Warn => text.yellow(),
			Level::Error => text.red(),
			Level::Activity => text.magenta(),
		}
	}

	pub fn stream(&self) -> Stream {
		match self {
			Level::Warn | Level::Error => Stream::Stderr,
			_ => Stream::Stdout,
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
