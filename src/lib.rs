//! unknown-sdk - Descriptors for missing development SDKs.
//!
//! When a project needs a tool installation that cannot be found (a JDK, a
//! Python interpreter, a Node.js runtime), something has to describe what is
//! missing so a resolver can look for it. An [`UnknownSdk`](sdk::UnknownSdk)
//! carries exactly that: the tool type, an optional declared name hint, and
//! a predicate that filters candidates by version string.
//!
//! # Modules
//!
//! - [`sdk`] - The descriptor, tool types, version predicates and comparison
//! - [`config`] - Descriptor files (YAML)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output styling
//!
//! # Example
//!
//! ```
//! use unknown_sdk::sdk::{ToolType, UnknownSdk, VersionPredicate};
//!
//! let sdk = UnknownSdk::builder(ToolType::other("RUNTIME_X").unwrap())
//!     .version_predicate(VersionPredicate::exact("11"))
//!     .build();
//!
//! assert!(sdk.declared_name().is_none());
//! assert!(sdk.accepts_version("11"));
//! assert!(!sdk.accepts_version("8"));
//! assert!(!sdk.accepts_version(""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod sdk;
pub mod ui;

pub use error::{Result, SdkError};
