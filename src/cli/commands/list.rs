//! List command implementation.
//!
//! The `unknown-sdk list` command prints every descriptor in the file.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::load_config_file;
use crate::error::{Result, SdkError};
use crate::ui::theme::SdkTheme;

use super::dispatcher::{config_failure, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config_path: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config_path: &Path, args: ListArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = SdkTheme::new();
        let descriptors = match load_config_file(&self.config_path)
            .and_then(|config| config.descriptors())
        {
            Ok(d) => d,
            Err(e) => return config_failure(e, out),
        };

        if self.args.json {
            let entries: Vec<serde_json::Value> = descriptors
                .iter()
                .map(|(key, sdk)| {
                    serde_json::json!({
                        "key": key,
                        "tool_type": sdk.tool_type().name(),
                        "declared_name": sdk.declared_name(),
                        "version": sdk.version_predicate().description(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| SdkError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        if descriptors.is_empty() {
            writeln!(out, "{}", theme.dim.apply_to("No SDKs declared."))?;
            return Ok(CommandResult::success());
        }

        writeln!(out, "  {}", theme.key.apply_to("SDKs:"))?;
        for (key, sdk) in &descriptors {
            writeln!(
                out,
                "    {} {}",
                theme.highlight.apply_to(key),
                theme.dim.apply_to(format!(
                    "(type: {}, name: {}, version: {})",
                    sdk.tool_type(),
                    sdk.declared_name().unwrap_or("-"),
                    sdk.version_predicate()
                ))
            )?;
        }

        Ok(CommandResult::success())
    }
}
