// ══════════════════════════════════════════════════════════════════════════════
// RENDER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Builds colored terminal text. Nothing here writes anywhere: the logger
// decides which stream a rendered line goes to.

use std::fmt::Display;
use chrono::Local;
use colored::*;
use crate::constants::{BOX_WIDTH, TERMINAL_TIME_FORMAT};
use crate::constants::glyphs::*;
use crate::style::Level;

/// Local wall clock, `HH:MM:SS`.
pub fn terminal_time() -> String {
	Local::now().format(TERMINAL_TIME_FORMAT).to_string()
}

/// `[text]` in the level's color.
pub fn tag(text: &str, level: Level) -> ColoredString {
	level.paint(&format!("[{}]", text))
}

/// `<time> [name] [LEVEL] <icon>  <message>`
pub fn level_line(time: &str, name: &str, level: Level, message: &str) -> String {
	format!(
		"{} {} {} {}  {}",
		time.dimmed(),
		tag(name, level),
		tag(level.as_str(), level),
		level.icon(),
		level.paint(message)
	)
}

/// Title line, plus a `└─ key: value │ ...` line when data is present.
pub fn activity_lines(time: &str, name: &str, title: &str, data: Option<&[(String, String)]>) -> String {
	let level = Level::Activity;
	let mut out = format!(
		"{} {} {} {}",
		time.dimmed(),
		tag(name, level),
		level.icon(),
		level.paint(title).bold()
	);

	if let Some(data) = data {
		let separator = format!(" {} ", VERTICAL).dimmed().to_string();
		let pairs: Vec<String> = data
			.iter()
			.map(|(key, value)| format!("{}: {}", key.dimmed(), value.white()))
			.collect();
		out.push_str(&format!("\n  {} {}", CORNER.dimmed(), pairs.join(&separator)));
	}
	out
}

/// Compact `{"key":"value",...}` blob, keys in the given order.
pub fn activity_blob(data: &[(String, String)]) -> String {
	let pairs: Vec<String> = data
		.iter()
		.map(|(key, value)| format!("{}:{}", serde_json::Value::from(key.as_str()), serde_json::Value::from(value.as_str())))
		.collect();
	format!("{{{}}}", pairs.join(","))
}

/// Plain-text message persisted for an activity event.
pub fn activity_message(title: &str, data: Option<&[(String, String)]>) -> String {
	match data {
		Some(data) => format!("{} {}", title, activity_blob(data)),
		None => title.to_string(),
	}
}

pub fn pairs_to_strings<K: AsRef<str>, V: Display>(data: &[(K, V)]) -> Vec<(String, String)> {
	data.iter().map(|(k, v)| (k.as_ref().to_string(), v.to_string())).collect()
}

fn rule(len: usize) -> String {
	HORIZONTAL.to_string().repeat(len)
}

/// Horizontal rule of `BOX_WIDTH` columns, optionally with a centered title.
pub fn divider_line(title: Option<&str>) -> String {
	match title {
		Some(title) => {
			let free = BOX_WIDTH.saturating_sub(title.chars().count() + 2);
			let left = free / 2;
			let right = free - left;
			format!("{} {} {}", rule(left).dimmed(), title.white().bold(), rule(right).dimmed())
		}
		None => rule(BOX_WIDTH).dimmed().to_string(),
	}
}

/// Bordered block `BOX_WIDTH` columns wide. Overlong content is not cut.
pub fn box_lines<S: AsRef<str>>(title: &str, content: &[S]) -> Vec<String> {
	let inner = BOX_WIDTH - 2;
	let border = |left: char, right: char| format!("{}{}{}", left, rule(inner), right).cyan().to_string();
	let row = |text: ColoredString| format!("{}{}{}", VERTICAL.to_string().cyan(), text, VERTICAL.to_string().cyan());
	let pad = |text: &str| format!("{:<width$}", format!(" {}", text), width = inner);

	let mut lines = Vec::with_capacity(content.len() + 4);
	lines.push(border(TOP_LEFT, TOP_RIGHT));
	lines.push(row(pad(title).white().bold()));
	lines.push(format!("{}{}{}", VERTICAL_RIGHT.to_string().cyan(), rule(inner).dimmed(), VERTICAL_LEFT.to_string().cyan()));
	for line in content {
		lines.push(row(pad(line.as_ref()).white()));
	}
	lines.push(border(BOTTOM_LEFT, BOTTOM_RIGHT));
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain() {
		colored::control::set_override(false);
	}

	fn sample() -> Vec<(String, String)> {
		pairs_to_strings(&[("count", "42"), ("source", "remote")])
	}

	#[test]
	fn test_level_line_layout() {
		plain();
		let line = level_line("12:34:56", "API", Level::Error, "failed to connect");
		assert_eq!(line, "12:34:56 [API] [ERROR] ❌  failed to connect");
	}

	#[test]
	fn test_terminal_time_shape() {
		let time = terminal_time();
		assert_eq!(time.len(), 8);
		assert_eq!(time.as_bytes()[2], b':');
		assert_eq!(time.as_bytes()[5], b':');
	}

	#[test]
	fn test_activity_without_data_is_one_line() {
		plain();
		let out = activity_lines("01:02:03", "bot", "cache sync", None);
		assert_eq!(out, "01:02:03 [bot] ⚡ cache sync");
	}

	#[test]
	fn test_activity_data_line() {
		plain();
		let data = sample();
		let out = activity_lines("01:02:03", "bot", "cache sync", Some(data.as_slice()));
		let lines: Vec<_> = out.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[1], "  └─ count: 42 │ source: remote");
	}

	#[test]
	fn test_activity_message() {
		let data = sample();
		assert_eq!(activity_message("cache sync", Some(data.as_slice())), r#"cache sync {"count":"42","source":"remote"}"#);
		assert_eq!(activity_message("cache sync", None), "cache sync");
		let empty: Vec<(String, String)> = Vec::new();
		assert_eq!(activity_message("empty", Some(empty.as_slice())), "empty {}");
	}

	#[test]
	fn test_activity_blob_escapes() {
		let data = pairs_to_strings(&[("quote", "say \"hi\"")]);
		assert_eq!(activity_blob(&data), r#"{"quote":"say \"hi\""}"#);
	}

	#[test]
	fn test_divider_plain_width() {
		plain();
		assert_eq!(divider_line(None).chars().count(), BOX_WIDTH);
	}

	#[test]
	fn test_divider_centers_title() {
		plain();
		let line = divider_line(Some("Startup"));
		assert_eq!(line.chars().count(), BOX_WIDTH);
		// 60 - 7 - 2 = 51 glyphs: 25 on the left, 26 on the right
		assert!(line.starts_with(&format!("{} Startup ", rule(25))));
		assert!(line.ends_with(&format!(" {}", rule(26))));
	}

	#[test]
	fn test_divider_even_split() {
		plain();
		let line = divider_line(Some("Boot"));
		assert_eq!(line, format!("{} Boot {}", rule(27), rule(27)));
	}

	#[test]
	fn test_divider_overlong_title_has_no_rule() {
		plain();
		let title = "x".repeat(70);
		assert_eq!(divider_line(Some(&title)), format!(" {} ", title));
	}

	#[test]
	fn test_box_layout() {
		plain();
		let lines = box_lines("Status", &["uptime 3h", "peers 4"]);
		assert_eq!(lines.len(), 6);
		for line in &lines {
			assert_eq!(line.chars().count(), BOX_WIDTH);
		}
		assert!(lines[0].starts_with(TOP_LEFT));
		assert!(lines[1].starts_with("│ Status "));
		assert!(lines[2].starts_with(VERTICAL_RIGHT));
		assert!(lines[3].starts_with("│ uptime 3h"));
		assert!(lines[5].starts_with(BOTTOM_LEFT));
	}

	#[test]
	fn test_box_does_not_truncate() {
		plain();
		let long = "y".repeat(80);
		let lines = box_lines("Wide", &[long.as_str()]);
		assert!(lines[3].contains(&long));
		assert!(lines[3].chars().count() > BOX_WIDTH);
	}
}
