//! CLI commands module.

mod check;
mod format;
mod parse;
mod util;

pub use check::CheckCommand;
pub use format::FormatCommand;
pub use parse::ParseCommand;

pub(crate) use util::*;
