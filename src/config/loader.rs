//! Descriptor file discovery and loading.

use crate::config::schema::SdkConfig;
use crate::error::{Result, SdkError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the project root when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".unknown-sdk.yml";

/// Path of the descriptor file for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(DEFAULT_CONFIG_FILE)
}

/// Load and validate a descriptor file.
///
/// # Errors
///
/// - [`SdkError::ConfigNotFound`] if the file does not exist
/// - [`SdkError::ConfigParseError`] if the YAML is malformed or has unknown keys
/// - [`SdkError::InvalidVersionRule`] if a version rule cannot be compiled
pub fn load_config_file(path: &Path) -> Result<SdkConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SdkError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SdkError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    config.validate()?;
    debug!(
        "Loaded {} SDK descriptor(s) from {}",
        config.sdks.len(),
        path.display()
    );
    Ok(config)
}

/// Parse YAML content into an [`SdkConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SdkConfig> {
    if content.trim().is_empty() {
        return Ok(SdkConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SdkError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
