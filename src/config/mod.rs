//! Descriptor files.
//!
//! Projects can list the SDKs they need in a YAML file so that missing ones
//! can be described without code:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use unknown_sdk::config::load_config_file;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join(".unknown-sdk.yml");
//! fs::write(&path, "sdks:\n  backend:\n    type: jdk\n    version:\n      exact: \"17\"\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! let sdk = config.descriptor("backend").unwrap();
//! assert!(sdk.accepts_version("17"));
//! assert!(!sdk.accepts_version("21"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{SdkConfig, SdkEntry, VersionRule};
