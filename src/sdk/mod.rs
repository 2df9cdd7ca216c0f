//! Missing-SDK descriptors.
//!
//! This module describes a tool installation that a project needs but that
//! is not available, in a form a resolver can search with.
//!
//! # Modules
//!
//! - [`descriptor`] - The [`UnknownSdk`] descriptor and its builder
//! - [`tool_type`] - Tool categories
//! - [`predicate`] - Version predicates used to filter candidates
//! - [`version`] - Version string parsing and comparison

pub mod descriptor;
pub mod predicate;
pub mod tool_type;
pub mod version;

pub use descriptor::{UnknownSdk, UnknownSdkBuilder};
pub use predicate::VersionPredicate;
pub use tool_type::{CustomTool, ToolType};
pub use version::{compare_versions, parse_version, Version};
