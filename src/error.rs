// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Failures that escape logger construction. Per-write failures never surface
// here: they are reported on the terminal and the logger keeps going.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
	#[error("Cannot create log directory '{}': {source}", path.display())]
	CreateLogDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Cannot determine execution context: {0}")]
	Context(#[source] io::Error),
}
