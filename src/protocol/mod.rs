//! Line protocol for qbedb
//!
//! - Input: one `<keyword> <json object>` command per line
//! - Output: original text of each `get` match, one per line
//! - Log channel: structured JSON on stderr
//!
//! Keywords: `add`, `get`, `delete`. Anything else is a no-op.

mod command;
mod errors;
mod session;

pub use command::{parse_line, Command};
pub use errors::{SessionError, SessionErrorCode, SessionResult};
pub use session::Session;
