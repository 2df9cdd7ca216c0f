//! Tool categories a descriptor can ask for.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of development tool that is missing.
///
/// Known categories get their own variant; anything else is carried as
/// [`ToolType::Other`] with its lowercased identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ToolType {
    /// Java development kit
    Jdk,
    /// Kotlin compiler
    Kotlin,
    /// Python interpreter
    Python,
    /// Node.js runtime
    Node,
    /// Ruby interpreter
    Ruby,
    /// Go toolchain
    Go,
    /// Rust toolchain
    Rust,
    /// .NET SDK
    Dotnet,
    /// Android SDK
    AndroidSdk,
    /// Any other tool category, by identifier
    Other(CustomTool),
}

/// Identifier of a tool category without its own [`ToolType`] variant.
///
/// Only [`ToolType::parse`] and [`ToolType::other`] create one, so the
/// identifier is always trimmed, lowercase, non-blank and not an alias of a
/// known category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomTool(String);

impl CustomTool {
    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToolType {
    /// Parse a tool type identifier.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Blank input is rejected since a descriptor always names a tool type.
    pub fn parse(value: &str) -> Result<Self> {
        let id = value.trim().to_lowercase();
        if id.is_empty() {
            return Err(SdkError::InvalidToolType {
                value: value.to_string(),
            });
        }
        Ok(match id.as_str() {
            "jdk" | "java" => ToolType::Jdk,
            "kotlin" => ToolType::Kotlin,
            "python" => ToolType::Python,
            "node" | "nodejs" => ToolType::Node,
            "ruby" => ToolType::Ruby,
            "go" | "golang" => ToolType::Go,
            "rust" => ToolType::Rust,
            "dotnet" | ".net" => ToolType::Dotnet,
            "android-sdk" | "android" => ToolType::AndroidSdk,
            _ => ToolType::Other(CustomTool(id)),
        })
    }

    /// Tool type for a custom identifier.
    ///
    /// Same normalization as [`ToolType::parse`]: an identifier naming a known
    /// category (or one of its aliases) yields that category's variant.
    pub fn other(id: &str) -> Result<Self> {
        ToolType::parse(id)
    }

    /// Canonical identifier.
    pub fn name(&self) -> &str {
        match self {
            ToolType::Jdk => "jdk",
            ToolType::Kotlin => "kotlin",
            ToolType::Python => "python",
            ToolType::Node => "node",
            ToolType::Ruby => "ruby",
            ToolType::Go => "go",
            ToolType::Rust => "rust",
            ToolType::Dotnet => "dotnet",
            ToolType::AndroidSdk => "android-sdk",
            ToolType::Other(id) => id.as_str(),
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        ToolType::parse(s)
    }
}

impl TryFrom<String> for ToolType {
    type Error = SdkError;

    fn try_from(value: String) -> Result<Self> {
        ToolType::parse(&value)
    }
}

impl From<ToolType> for String {
    fn from(value: ToolType) -> Self {
        value.name().to_string()
    }
}
