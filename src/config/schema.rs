//! Descriptor file schema.
//!
//! ```yaml
//! sdks:
//!   backend:
//!     type: jdk
//!     name: corretto-17
//!     version:
//!       prefix: "17"
//!   scripts:
//!     type: node
//! ```

use crate::error::{Result, SdkError};
use crate::sdk::{ToolType, UnknownSdk, VersionPredicate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Root of a descriptor file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkConfig {
    /// Missing SDKs, keyed by a project-local name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sdks: BTreeMap<String, SdkEntry>,
}

/// One missing SDK as written in a descriptor file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkEntry {
    /// Tool type to resolve
    #[serde(rename = "type")]
    pub tool_type: ToolType,

    /// Declared SDK name hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Which versions are acceptable (any, if omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRule>,
}

/// Version rule for an entry.
///
/// Written either as the bare keyword `any` or as a single-key map such as
/// `{ prefix: "17" }`. Integer versions (`exact: 17`) are accepted as
/// written; decimal ones must be quoted, since YAML reads `3.10` as `3.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum VersionRule {
    /// Accept any version
    Any,
    /// Accept exactly this version string
    Exact(String),
    /// Accept any of these exact version strings
    AnyOf(Vec<String>),
    /// Accept versions starting with these numeric components
    Prefix(String),
    /// Accept versions at or above this one
    AtLeast(String),
    /// Accept versions matching this regular expression
    Pattern(String),
}

const RULE_KEYS: &str = "any, exact, any_of, prefix, at_least, pattern";

/// Read a rule value as a version string.
fn version_scalar(key: &str, value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Value::Number(n) => Err(format!(
            "`{}` value {} was read as a decimal number, which drops trailing zeros; \
             quote the version as a string",
            key, n
        )),
        _ => Err(format!("`{}` must be a version string", key)),
    }
}

impl TryFrom<Value> for VersionRule {
    type Error = String;

    fn try_from(raw: Value) -> std::result::Result<Self, String> {
        let mapping = match raw {
            Value::String(k) if k == "any" => return Ok(VersionRule::Any),
            Value::String(k) => {
                return Err(format!(
                    "unknown version rule '{}' (expected one of: {})",
                    k, RULE_KEYS
                ))
            }
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(format!(
                    "version rule must be `any` or a map with one of: {}",
                    RULE_KEYS
                ))
            }
        };

        if mapping.len() != 1 {
            return Err(format!(
                "version rule must have exactly one key (one of: {})",
                RULE_KEYS
            ));
        }
        let Some((key, value)) = mapping.iter().next() else {
            return Err(format!("version rule needs one of: {}", RULE_KEYS));
        };
        let key = key
            .as_str()
            .ok_or_else(|| "version rule key must be a string".to_string())?;

        match key {
            "exact" => version_scalar(key, value).map(VersionRule::Exact),
            "prefix" => version_scalar(key, value).map(VersionRule::Prefix),
            "at_least" => version_scalar(key, value).map(VersionRule::AtLeast),
            "pattern" => match value {
                Value::String(s) => Ok(VersionRule::Pattern(s.clone())),
                _ => Err("`pattern` must be a string".to_string()),
            },
            "any_of" => match value {
                Value::Sequence(items) => items
                    .iter()
                    .map(|item| version_scalar(key, item))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map(VersionRule::AnyOf),
                _ => Err("`any_of` must be a list of versions".to_string()),
            },
            other => Err(format!(
                "unknown version rule '{}' (expected one of: {})",
                other, RULE_KEYS
            )),
        }
    }
}

impl From<VersionRule> for Value {
    fn from(rule: VersionRule) -> Self {
        let (key, value) = match rule {
            VersionRule::Any => return Value::String("any".to_string()),
            VersionRule::Exact(v) => ("exact", Value::String(v)),
            VersionRule::AnyOf(vs) => (
                "any_of",
                Value::Sequence(vs.into_iter().map(Value::String).collect()),
            ),
            VersionRule::Prefix(p) => ("prefix", Value::String(p)),
            VersionRule::AtLeast(min) => ("at_least", Value::String(min)),
            VersionRule::Pattern(pattern) => ("pattern", Value::String(pattern)),
        };
        let mut mapping = Mapping::new();
        mapping.insert(Value::String(key.to_string()), value);
        Value::Mapping(mapping)
    }
}

impl VersionRule {
    /// Rule key as written in the file.
    pub fn kind(&self) -> &'static str {
        match self {
            VersionRule::Any => "any",
            VersionRule::Exact(_) => "exact",
            VersionRule::AnyOf(_) => "any_of",
            VersionRule::Prefix(_) => "prefix",
            VersionRule::AtLeast(_) => "at_least",
            VersionRule::Pattern(_) => "pattern",
        }
    }

    /// Compile this rule into a predicate.
    pub fn to_predicate(&self) -> Result<VersionPredicate> {
        match self {
            VersionRule::Any => Ok(VersionPredicate::always()),
            VersionRule::Exact(v) => Ok(VersionPredicate::exact(v.clone())),
            VersionRule::AnyOf(vs) => {
                if vs.is_empty() {
                    return Err(SdkError::InvalidVersionRule {
                        rule: self.kind().to_string(),
                        message: "list must not be empty".to_string(),
                    });
                }
                Ok(VersionPredicate::any_of(vs.clone()))
            }
            VersionRule::Prefix(p) => VersionPredicate::prefix(p),
            VersionRule::AtLeast(min) => VersionPredicate::at_least(min),
            VersionRule::Pattern(pattern) => Regex::new(pattern)
                .map(VersionPredicate::matching)
                .map_err(|e| SdkError::InvalidVersionRule {
                    rule: self.kind().to_string(),
                    message: e.to_string(),
                }),
        }
    }
}

impl SdkEntry {
    /// Build the descriptor for this entry.
    ///
    /// A blank `name` is treated as absent.
    pub fn to_descriptor(&self) -> Result<UnknownSdk> {
        let predicate = match &self.version {
            Some(rule) => rule.to_predicate()?,
            None => VersionPredicate::always(),
        };
        let name = self
            .name
            .as_ref()
            .filter(|n| !n.trim().is_empty())
            .cloned();
        Ok(UnknownSdk::builder(self.tool_type.clone())
            .maybe_declared_name(name)
            .version_predicate(predicate)
            .build())
    }
}

impl SdkConfig {
    /// Build the descriptor stored under `key`.
    pub fn descriptor(&self, key: &str) -> Result<UnknownSdk> {
        self.sdks
            .get(key)
            .ok_or_else(|| SdkError::UnknownDescriptor {
                name: key.to_string(),
            })?
            .to_descriptor()
    }

    /// Build every descriptor, in key order.
    pub fn descriptors(&self) -> Result<Vec<(String, UnknownSdk)>> {
        self.sdks
            .iter()
            .map(|(key, entry)| Ok((key.clone(), entry.to_descriptor()?)))
            .collect()
    }

    /// Check that every entry compiles, reporting the first bad one.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in &self.sdks {
            if let Some(rule) = &entry.version {
                rule.to_predicate().map_err(|e| match e {
                    SdkError::InvalidVersionRule { rule, message } => {
                        SdkError::InvalidVersionRule {
                            rule: format!("{}.version.{}", key, rule),
                            message,
                        }
                    }
                    other => other,
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> SdkConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn parses_full_entry() {
        let config = parse(
            r#"
sdks:
  backend:
    type: jdk
    name: corretto-17
    version:
      prefix: "17"
"#,
        );
        let entry = &config.sdks["backend"];
        assert_eq!(entry.tool_type, ToolType::Jdk);
        assert_eq!(entry.name.as_deref(), Some("corretto-17"));
        assert_eq!(entry.version, Some(VersionRule::Prefix("17".to_string())));
    }

    #[test]
    fn parses_minimal_entry() {
        let config = parse("sdks:\n  scripts:\n    type: node\n");
        let sdk = config.descriptor("scripts").unwrap();
        assert_eq!(sdk.tool_type(), &ToolType::Node);
        assert!(sdk.declared_name().is_none());
        assert!(sdk.version_predicate().is_always());
    }

    #[test]
    fn parses_every_rule_kind() {
        let config = parse(
            r#"
sdks:
  a: { type: go, version: any }
  b: { type: go, version: { exact: "1.22" } }
  c: { type: go, version: { any_of: ["1.21", "1.22"] } }
  d: { type: go, version: { prefix: "1" } }
  e: { type: go, version: { at_least: "1.20" } }
  f: { type: go, version: { pattern: "^1\\.2[0-9]" } }
"#,
        );
        let kinds: Vec<&str> = config
            .sdks
            .values()
            .map(|e| e.version.as_ref().unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec!["any", "exact", "any_of", "prefix", "at_least", "pattern"]
        );
        config.validate().unwrap();
    }

    #[test]
    fn empty_file_has_no_sdks() {
        let config: SdkConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.sdks.is_empty());
        assert!(config.descriptors().unwrap().is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<SdkConfig, _> =
            serde_yaml::from_str("sdks:\n  a:\n    type: jdk\n    flavour: temurin\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_type_is_rejected() {
        let result: std::result::Result<SdkConfig, _> =
            serde_yaml::from_str("sdks:\n  a:\n    name: foo\n");
        assert!(result.is_err());
    }

    #[test]
    fn blank_name_is_absent() {
        let config = parse("sdks:\n  a:\n    type: jdk\n    name: '  '\n");
        assert!(config.descriptor("a").unwrap().declared_name().is_none());
    }

    #[test]
    fn unknown_descriptor_errors() {
        let config = SdkConfig::default();
        assert!(matches!(
            config.descriptor("missing"),
            Err(SdkError::UnknownDescriptor { name }) if name == "missing"
        ));
    }

    #[test]
    fn invalid_pattern_fails_validation() {
        let config = parse("sdks:\n  bad:\n    type: jdk\n    version:\n      pattern: '('\n");
        let err = config.validate().unwrap_err();
        match err {
            SdkError::InvalidVersionRule { rule, .. } => {
                assert_eq!(rule, "bad.version.pattern");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_any_of_is_invalid() {
        let rule = VersionRule::AnyOf(vec![]);
        assert!(rule.to_predicate().is_err());
    }

    #[test]
    fn unparsable_at_least_is_invalid() {
        let rule = VersionRule::AtLeast("latest".to_string());
        assert!(matches!(
            rule.to_predicate(),
            Err(SdkError::InvalidVersionRule { .. })
        ));
    }

    #[test]
    fn rules_compile_to_matching_predicates() {
        let exact = VersionRule::Exact("11".to_string()).to_predicate().unwrap();
        assert!(exact.test("11"));
        assert!(!exact.test("8"));

        let at_least = VersionRule::AtLeast("3.10".to_string())
            .to_predicate()
            .unwrap();
        assert!(at_least.test("3.11"));
        assert!(!at_least.test("3.9"));
    }

    #[test]
    fn descriptors_are_in_key_order() {
        let config = parse("sdks:\n  zeta: { type: ruby }\n  alpha: { type: python }\n");
        let keys: Vec<String> = config
            .descriptors()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn rule_with_two_keys_is_rejected() {
        let result: std::result::Result<SdkConfig, _> = serde_yaml::from_str(
            "sdks:\n  a:\n    type: jdk\n    version: { exact: \"17\", prefix: \"17\" }\n",
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("exactly one key"), "{}", err);
    }

    #[test]
    fn unknown_rule_keyword_is_rejected() {
        let result: std::result::Result<SdkConfig, _> =
            serde_yaml::from_str("sdks:\n  a:\n    type: jdk\n    version: newest\n");
        assert!(result.is_err());
    }

    #[test]
    fn rule_serializes_as_single_key_map() {
        let yaml = serde_yaml::to_string(&VersionRule::Prefix("17".to_string())).unwrap();
        assert_eq!(yaml.trim(), "prefix: '17'");
        let yaml = serde_yaml::to_string(&VersionRule::Any).unwrap();
        assert_eq!(yaml.trim(), "any");
    }

    #[test]
    fn integer_versions_need_no_quotes() {
        let config = parse(
            "sdks:\n  a: { type: jdk, version: { exact: 17 } }\n  b: { type: jdk, version: { any_of: [17, \"21\"] } }\n",
        );
        assert_eq!(
            config.sdks["a"].version,
            Some(VersionRule::Exact("17".to_string()))
        );
        assert_eq!(
            config.sdks["b"].version,
            Some(VersionRule::AnyOf(vec!["17".to_string(), "21".to_string()]))
        );
        assert!(config.descriptor("a").unwrap().accepts_version("17"));
    }

    #[test]
    fn decimal_versions_must_be_quoted() {
        let result: std::result::Result<SdkConfig, _> =
            serde_yaml::from_str("sdks:\n  a:\n    type: python\n    version:\n      at_least: 3.10\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at_least"), "{}", err);
        assert!(err.contains("quote the version"), "{}", err);
    }

    #[test]
    fn quoted_decimal_keeps_trailing_zero() {
        let config = parse("sdks:\n  a:\n    type: python\n    version:\n      at_least: \"3.10\"\n");
        let sdk = config.descriptor("a").unwrap();
        assert!(sdk.accepts_version("3.10.2"));
        assert!(!sdk.accepts_version("3.9"));
    }

    #[test]
    fn unknown_rule_key_names_the_choices() {
        let result: std::result::Result<SdkConfig, _> =
            serde_yaml::from_str("sdks:\n  a:\n    type: jdk\n    version: { newest: \"17\" }\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at_least"), "{}", err);
    }
}
