//! Descriptor for a missing SDK.
//!
//! An [`UnknownSdk`] describes a tool installation a project needs but that
//! could not be found: the tool type to look for, optionally the name the
//! project expected, and a predicate to filter candidates by version.
//! A resolver reads it; nothing mutates it after construction.
//!
//! # Example
//!
//! ```
//! use unknown_sdk::sdk::{ToolType, UnknownSdk, VersionPredicate};
//!
//! let sdk = UnknownSdk::builder(ToolType::Jdk)
//!     .declared_name("corretto-17")
//!     .version_predicate(VersionPredicate::prefix("17").unwrap())
//!     .build();
//!
//! assert_eq!(sdk.tool_type(), &ToolType::Jdk);
//! assert_eq!(sdk.declared_name(), Some("corretto-17"));
//! assert!(sdk.accepts_version("17.0.9"));
//! assert!(!sdk.accepts_version("21"));
//! ```

use crate::sdk::predicate::VersionPredicate;
use crate::sdk::tool_type::ToolType;

/// A missing SDK: what to look for and which versions are acceptable.
#[derive(Debug, Clone)]
pub struct UnknownSdk {
    tool_type: ToolType,
    declared_name: Option<String>,
    version_predicate: VersionPredicate,
}

impl UnknownSdk {
    /// Descriptor with no declared name that accepts any version.
    pub fn new(tool_type: ToolType) -> Self {
        Self::builder(tool_type).build()
    }

    /// Start building a descriptor for `tool_type`.
    pub fn builder(tool_type: ToolType) -> UnknownSdkBuilder {
        UnknownSdkBuilder {
            tool_type,
            declared_name: None,
            version_predicate: VersionPredicate::always(),
        }
    }

    /// The tool type to resolve.
    pub fn tool_type(&self) -> &ToolType {
        &self.tool_type
    }

    /// The name the project expected, if known.
    ///
    /// Resolvers may use this to rank candidates. It is a hint only.
    pub fn declared_name(&self) -> Option<&str> {
        self.declared_name.as_deref()
    }

    /// Predicate for filtering candidates by their reported version.
    pub fn version_predicate(&self) -> &VersionPredicate {
        &self.version_predicate
    }

    /// Shorthand for `self.version_predicate().test(version)`.
    pub fn accepts_version(&self, version: &str) -> bool {
        self.version_predicate.test(version)
    }
}

/// Builder for [`UnknownSdk`].
#[derive(Debug, Clone)]
pub struct UnknownSdkBuilder {
    tool_type: ToolType,
    declared_name: Option<String>,
    version_predicate: VersionPredicate,
}

impl UnknownSdkBuilder {
    /// Set the declared name hint.
    pub fn declared_name(mut self, name: impl Into<String>) -> Self {
        self.declared_name = Some(name.into());
        self
    }

    /// Set or clear the declared name hint.
    pub fn maybe_declared_name(mut self, name: Option<String>) -> Self {
        self.declared_name = name;
        self
    }

    /// Replace the default accept-everything predicate.
    pub fn version_predicate(mut self, predicate: VersionPredicate) -> Self {
        self.version_predicate = predicate;
        self
    }

    /// Finish the descriptor.
    pub fn build(self) -> UnknownSdk {
        UnknownSdk {
            tool_type: self.tool_type,
            declared_name: self.declared_name,
            version_predicate: self.version_predicate,
        }
    }
}
