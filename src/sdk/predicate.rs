//! Version predicates for filtering candidate installations.
//!
//! A [`VersionPredicate`] is a stored function value from a candidate's
//! reported version string to a boolean. The contract for every predicate:
//!
//! - **Total**: it answers for any input, including `""` and garbage.
//!   Unparsable input is non-matching.
//! - **Pure**: the same input gives the same answer for the lifetime of the
//!   predicate. No I/O, no blocking, no shared mutable state.
//!
//! Rust closures cannot promise they won't panic, so [`VersionPredicate::test`]
//! catches a panicking predicate and treats it as a rejection. Catching the
//! unwind does not suppress the process panic hook: the default hook still
//! prints the panic message to stderr. Callers that need a quiet stderr can
//! install their own hook with [`std::panic::set_hook`].
//!
//! # Example
//!
//! ```
//! use unknown_sdk::sdk::VersionPredicate;
//!
//! let lts = VersionPredicate::any_of(["17", "21"]);
//! assert!(lts.test("21"));
//! assert!(!lts.test("22"));
//! assert!(VersionPredicate::always().test("not a version"));
//! ```

use crate::error::{Result, SdkError};
use crate::sdk::version::{parse_version, Version};
use regex::Regex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{trace, warn};

type PredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// A pure, total test over version strings.
///
/// Cloning is cheap: clones share the same function value.
#[derive(Clone)]
pub struct VersionPredicate {
    description: String,
    func: Arc<PredicateFn>,
    always: bool,
}

impl VersionPredicate {
    /// The default predicate: accepts every version string.
    pub fn always() -> Self {
        Self {
            description: "any version".to_string(),
            func: Arc::new(|_: &str| true),
            always: true,
        }
    }

    /// Wrap a custom predicate.
    ///
    /// `f` must be total and pure; see the module docs.
    pub fn from_fn<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            func: Arc::new(f),
            always: false,
        }
    }

    /// Accept exactly `version`, byte for byte.
    pub fn exact(version: impl Into<String>) -> Self {
        let expected = version.into();
        let description = format!("exactly {}", expected);
        Self::from_fn(description, move |candidate| candidate == expected)
    }

    /// Accept any of the listed exact versions.
    pub fn any_of<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted: Vec<String> = versions.into_iter().map(Into::into).collect();
        let description = format!("one of {}", accepted.join(", "));
        Self::from_fn(description, move |candidate| {
            accepted.iter().any(|v| v == candidate)
        })
    }

    /// Accept versions whose leading numeric components equal `prefix`'s.
    ///
    /// `prefix("17")` accepts `17`, `17.0.2` and `17-ea`, but not `170`.
    pub fn prefix(prefix: &str) -> Result<Self> {
        let expected = require_version("prefix", prefix)?;
        let description = format!("{}.x", expected);
        Ok(Self::from_fn(description, move |candidate| {
            parse_version(candidate).is_some_and(|v| v.starts_with(&expected))
        }))
    }

    /// Accept versions greater than or equal to `min`.
    pub fn at_least(min: &str) -> Result<Self> {
        let minimum = require_version("at_least", min)?;
        let description = format!(">= {}", minimum);
        Ok(Self::from_fn(description, move |candidate| {
            parse_version(candidate).is_some_and(|v| v >= minimum)
        }))
    }

    /// Accept versions matching a regular expression anywhere in the string.
    pub fn matching(pattern: Regex) -> Self {
        let description = format!("matches /{}/", pattern.as_str());
        Self::from_fn(description, move |candidate| pattern.is_match(candidate))
    }

    /// Test a candidate's version string.
    ///
    /// Never panics. A predicate that panics counts as not matching, though
    /// the panic hook still runs and reports it.
    pub fn test(&self, version: &str) -> bool {
        if self.always {
            return true;
        }
        match panic::catch_unwind(AssertUnwindSafe(|| (self.func)(version))) {
            Ok(accepted) => {
                trace!(
                    "Version '{}' {} by '{}'",
                    version,
                    if accepted { "accepted" } else { "rejected" },
                    self.description
                );
                accepted
            }
            Err(_) => {
                warn!(
                    "Version predicate '{}' panicked on '{}'; treating as no match",
                    self.description, version
                );
                false
            }
        }
    }

    /// Test a candidate whose version may be unknown.
    ///
    /// Only the always-accept predicate accepts an unknown version.
    pub fn test_reported(&self, version: Option<&str>) -> bool {
        match version {
            Some(v) => self.test(v),
            None => self.always,
        }
    }

    /// Whether this is the accept-everything predicate.
    pub fn is_always(&self) -> bool {
        self.always
    }

    /// Human-readable description of what this predicate accepts.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Default for VersionPredicate {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VersionPredicate")
            .field(&self.description)
            .finish()
    }
}

impl fmt::Display for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

fn require_version(rule: &str, value: &str) -> Result<Version> {
    parse_version(value).ok_or_else(|| SdkError::InvalidVersionRule {
        rule: rule.to_string(),
        message: format!("'{}' does not contain a version number", value),
    })
}
