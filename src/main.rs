// ══════════════════════════════════════════════════════════════════════════════
// DAYLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Emits one event through a daylog Logger from the command line. Handy for
// shell scripts that want their output in the same daily log files as the
// long-running process next to them.

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use daylog::{Level, Logger, LoggerError};

/// Leveled console logger with per-day log files
#[derive(Parser)]
#[command(name = "daylog")]
#[command(version)]
#[command(about = "Write colored log lines and mirror them to daily log files", long_about = None)]
struct Cli {
	/// Logical source name shown in every line
	#[arg(short, long, default_value = "daylog", global = true)]
	name: String,

	/// Only print to the terminal
	#[arg(long, global = true)]
	no_file: bool,

	/// Log directory (default: resolved from how the binary was launched)
	#[arg(long, global = true)]
	log_dir: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Debug-level event
	Debug { message: Vec<String> },

	/// Success event
	Success { message: Vec<String> },

	/// Informational event
	Info { message: Vec<String> },

	/// Warning (stderr)
	Warn { message: Vec<String> },

	/// Error (stderr)
	Error { message: Vec<String> },

	/// Activity event with optional key=value data
	Activity {
		title: String,

		/// Data pair, repeatable (key=value)
		#[arg(short, long = "data", value_parser = parse_pair)]
		data: Vec<(String, String)>,
	},

	/// Print a horizontal rule
	Divider { title: Option<String> },

	/// Print a bordered box
	Box {
		title: String,
		lines: Vec<String>,
	},
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
	raw.split_once('=')
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn open_logger(cli: &Cli) -> Result<Logger, LoggerError> {
	let persist = !cli.no_file;
	match &cli.log_dir {
		Some(dir) => Logger::at_directory(cli.name.clone(), persist, dir.clone()),
		None => Logger::new(cli.name.clone(), persist),
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let logger = match open_logger(&cli) {
		Ok(logger) => logger,
		Err(e) => {
			// Fall back to a terminal-only logger so the failure is still styled.
			match Logger::at_directory(cli.name.clone(), false, ".") {
				Ok(fallback) => fallback.error(e.to_string()),
				Err(_) => eprintln!("[{}] {}", Level::Error, e),
			}
			return ExitCode::FAILURE;
		}
	};

	match cli.command {
		Commands::Debug { message } => logger.debug(message),
		Commands::Success { message } => logger.success(message),
		Commands::Info { message } => logger.info(message),
		Commands::Warn { message } => logger.warn(message),
		Commands::Error { message } => logger.error(message),
		Commands::Activity { title, data } => {
			if data.is_empty() {
				logger.activity(&title);
			} else {
				logger.activity_with(&title, &data);
			}
		}
		Commands::Divider { title } => logger.divider(title.as_deref()),
		Commands::Box { title, lines } => logger.draw_box(&title, &lines),
	}

	ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_pair() {
		assert_eq!(parse_pair("count=42").unwrap(), ("count".to_string(), "42".to_string()));
		assert_eq!(parse_pair("expr=a=b").unwrap(), ("expr".to_string(), "a=b".to_string()));
		assert!(parse_pair("novalue").is_err());
	}

	#[test]
	fn test_cli_parses_activity_data() {
		let cli = Cli::parse_from(["daylog", "--name", "API", "activity", "cache sync", "-d", "count=42", "-d", "source=remote"]);
		assert_eq!(cli.name, "API");
		match cli.command {
			Commands::Activity { title, data } => {
				assert_eq!(title, "cache sync");
				assert_eq!(data.len(), 2);
				assert_eq!(data[1], ("source".to_string(), "remote".to_string()));
			}
			_ => panic!("expected activity"),
		}
	}

	#[test]
	fn test_cli_no_file_after_subcommand() {
		let cli = Cli::parse_from(["daylog", "error", "failed", "to", "connect", "--no-file"]);
		assert!(cli.no_file);
		assert!(matches!(cli.command, Commands::Error { ref message } if message.join(" ") == "failed to connect"));
	}
}
