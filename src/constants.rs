// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used by the logger and its renderers.
// - BOX_WIDTH: Total column width of dividers and boxes
// - LOG_DIR_NAME: Folder created under the resolved log root
// - FILE_UTC_OFFSET_SECS: Fixed zone for timestamps written into log files
// - Box-drawing glyphs shared by dividers, boxes and activity data lines

pub const BOX_WIDTH: usize = 60;

pub const LOG_DIR_NAME: &str = "logs";

// Asia/Bangkok (UTC+07:00, no daylight saving)
pub const FILE_UTC_OFFSET_SECS: i32 = 7 * 3600;

pub const TERMINAL_TIME_FORMAT: &str = "%H:%M:%S";
pub const FILE_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

pub mod glyphs {
	pub const TOP_LEFT: char = '╭';
	pub const TOP_RIGHT: char = '╮';
	pub const BOTTOM_LEFT: char = '╰';
	pub const BOTTOM_RIGHT: char = '╯';
	pub const HORIZONTAL: char = '─';
	pub const VERTICAL: char = '│';
	pub const VERTICAL_RIGHT: char = '├';
	pub const VERTICAL_LEFT: char = '┤';
	pub const CORNER: &str = "└─";
}
