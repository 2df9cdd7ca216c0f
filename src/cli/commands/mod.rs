//! Command implementations.

pub mod check;
pub mod dispatcher;
pub mod list;

pub use check::{CandidateResult, CheckCommand};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use list::ListCommand;
