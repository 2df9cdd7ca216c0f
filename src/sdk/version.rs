//! Version string parsing and comparison.
//!
//! Tools report versions in wildly different shapes (`openjdk 17.0.2`,
//! `1.8.0_292`, `v20.11.1`, `Python 3.12.1`). This module pulls the first
//! dotted numeric run out of such a string and compares runs numerically.
//! Anything without digits is unparsable and yields `None`, never a panic.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// First dotted run of digits in a string.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").expect("version regex is valid"));

/// A parsed version: numeric components in order of significance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Whether this version's leading components equal all of `prefix`'s.
    ///
    /// `17.0.2` starts with `17` and `17.0`, but `170` does not start with `17`.
    pub fn starts_with(&self, prefix: &Version) -> bool {
        self.components.starts_with(&prefix.components)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let l = self.components.get(i).copied().unwrap_or(0);
            let r = other.components.get(i).copied().unwrap_or(0);
            match l.cmp(&r) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Extract a version from an arbitrary version string.
///
/// Components too large for `u64` make the whole string unparsable.
pub fn parse_version(input: &str) -> Option<Version> {
    let run = VERSION_REGEX.find(input)?;
    let components = run
        .as_str()
        .split('.')
        .map(|s| s.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    Some(Version { components })
}

/// Compare two version strings numerically.
///
/// Missing trailing components count as zero, so `17` equals `17.0.0`.
/// Returns `None` if either side has no parsable version.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = parse_version(a)?;
    let b = parse_version(b)?;
    Some(a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(input: &str) -> Vec<u64> {
        parse_version(input).unwrap().components().to_vec()
    }

    #[test]
    fn parses_plain_versions() {
        assert_eq!(components("17"), vec![17]);
        assert_eq!(components("3.12.1"), vec![3, 12, 1]);
    }

    #[test]
    fn parses_decorated_versions() {
        assert_eq!(components("openjdk 17.0.2 2022-01-18"), vec![17, 0, 2]);
        assert_eq!(components("1.8.0_292"), vec![1, 8, 0]);
        assert_eq!(components("v20.11.1"), vec![20, 11, 1]);
        assert_eq!(components("Python 3.12.1"), vec![3, 12, 1]);
        assert_eq!(components("17-ea"), vec![17]);
    }

    #[test]
    fn garbage_is_unparsable() {
        assert!(parse_version("").is_none());
        assert!(parse_version("abc").is_none());
        assert!(parse_version("...").is_none());
    }

    #[test]
    fn overflowing_component_is_unparsable() {
        assert!(parse_version("99999999999999999999999").is_none());
    }

    #[test]
    fn compare_orders_numerically() {
        assert_eq!(compare_versions("1.10", "1.9"), Some(Ordering::Greater));
        assert_eq!(compare_versions("3.9", "3.10"), Some(Ordering::Less));
        assert_eq!(compare_versions("17", "17.0.0"), Some(Ordering::Equal));
    }

    #[test]
    fn compare_unparsable_is_none() {
        assert_eq!(compare_versions("abc", "1.0"), None);
        assert_eq!(compare_versions("1.0", ""), None);
    }

    #[test]
    fn starts_with_respects_component_boundaries() {
        let prefix = parse_version("17").unwrap();
        assert!(parse_version("17.0.2").unwrap().starts_with(&prefix));
        assert!(parse_version("17").unwrap().starts_with(&prefix));
        assert!(!parse_version("170").unwrap().starts_with(&prefix));
        assert!(!parse_version("1.7").unwrap().starts_with(&prefix));
    }

    #[test]
    fn display_joins_components() {
        assert_eq!(parse_version("jdk-21.0.1+12").unwrap().to_string(), "21.0.1");
    }
}
