// ══════════════════════════════════════════════════════════════════════════════
// CONTEXT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Describes how the process was launched and resolves where log files live.
// A packaged binary keeps its logs next to the executable; a development run
// (launched through cargo) keeps them under the working directory.

use std::env;
use std::path::{Path, PathBuf};
use crate::constants::LOG_DIR_NAME;
use crate::error::LoggerError;

/// Snapshot of the process facts that decide the log root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
	pub is_packaged: bool,
	pub executable_path: PathBuf,
	pub working_directory: PathBuf,
}

impl ExecutionContext {
	/// Reads the current process once. Cargo exports `CARGO` to every process
	/// it launches, so its absence marks a standalone binary.
	pub fn detect() -> Result<Self, LoggerError> {
		let executable_path = env::current_exe().map_err(LoggerError::Context)?;
		let working_directory = env::current_dir().map_err(LoggerError::Context)?;
		Ok(Self {
			is_packaged: env::var_os("CARGO").is_none(),
			executable_path,
			working_directory,
		})
	}

	/// Log root for this context. Pure: touches nothing on disk.
	pub fn log_directory(&self) -> PathBuf {
		if self.is_packaged {
			let base = self.executable_path.parent().unwrap_or(Path::new(""));
			base.join(LOG_DIR_NAME)
		} else {
			self.working_directory.join(LOG_DIR_NAME)
		}
	}
}
