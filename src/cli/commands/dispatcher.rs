//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::default_config_path;
use crate::error::{Result, SdkError};
use crate::ui::theme::SdkTheme;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Exit code when the descriptor file or the requested descriptor is unusable.
pub const CONFIG_UNUSABLE_EXIT: i32 = 2;

/// Report a configuration problem and turn it into the exit-2 result.
///
/// Errors unrelated to the descriptor file are passed back unchanged.
pub fn config_failure(err: SdkError, out: &mut dyn Write) -> Result<CommandResult> {
    let message = match err {
        SdkError::ConfigNotFound { path } => {
            format!("No descriptor file found at {}", path.display())
        }
        e @ (SdkError::ConfigParseError { .. }
        | SdkError::InvalidVersionRule { .. }
        | SdkError::InvalidToolType { .. }
        | SdkError::UnknownDescriptor { .. }) => e.to_string(),
        other => return Err(other),
    };
    writeln!(out, "{}", SdkTheme::new().error.apply_to(message))?;
    Ok(CommandResult::failure(CONFIG_UNUSABLE_EXIT))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher reading descriptors from `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Create a dispatcher for the default descriptor file of a project.
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(default_config_path(project_root))
    }

    /// Get the descriptor file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.config_path, args.clone());
                cmd.execute(out)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.config_path, args.clone());
                cmd.execute(out)
            }
        }
    }
}
