// ══════════════════════════════════════════════════════════════════════════════
// DAYLOG
// ══════════════════════════════════════════════════════════════════════════════
//
// Leveled console logger that mirrors every event into plain-text log files,
// one file per UTC day and level:
//
//   logs/2026-10-18-error.log
//   [18/10/2026, 16:02:03] [4242] [API] [ERROR] failed to connect
//
// Terminal lines are colored and carry an icon per level. File writes are
// best-effort: a failing append is reported on stderr and the next call tries
// again.

pub mod constants;
pub mod console;
pub mod context;
pub mod error;
pub mod io;
pub mod logger;
pub mod render;
pub mod style;

pub use console::{Console, MemoryConsole, StdConsole};
pub use context::ExecutionContext;
pub use error::LoggerError;
pub use logger::{IntoMessage, Logger};
pub use style::{Level, Stream};
