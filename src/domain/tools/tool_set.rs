//! Tool names and the per-user tool set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Longest tool name the store accepts, in characters.
pub const MAX_TOOL_NAME_LEN: usize = 255;

/// Name of a single tool. Any string is a valid name, including `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    /// Creates a tool name, rejecting names longer than [`MAX_TOOL_NAME_LEN`].
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.chars().count() > MAX_TOOL_NAME_LEN {
            return Err(ValidationError::too_long("tools", MAX_TOOL_NAME_LEN));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Duplicate-free, ordered collection of tool names.
///
/// Order is first occurrence. Building a set from `["b", "a", "b"]`
/// always yields `["b", "a"]`, so what gets persisted for a given input
/// never depends on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolSet(Vec<ToolName>);

impl ToolSet {
    /// Builds a set from caller input, dropping repeated names.
    ///
    /// # Errors
    ///
    /// Returns `TooLong` if any entry exceeds [`MAX_TOOL_NAME_LEN`].
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(ToolName::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::dedup(names))
    }

    /// Rebuilds a set from rows already in the store. Never fails.
    pub fn from_stored(names: Vec<String>) -> Self {
        Self::dedup(names.into_iter().map(ToolName))
    }

    fn dedup(names: impl IntoIterator<Item = ToolName>) -> Self {
        let mut seen = HashSet::new();
        Self(
            names
                .into_iter()
                .filter(|tool| seen.insert(tool.clone()))
                .collect(),
        )
    }

    /// The empty set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolName> {
        self.0.iter()
    }

    /// Names as plain strings, in set order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|t| t.0.clone()).collect()
    }

    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(|t| t.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tool_name_accepts_empty_string() {
        assert_eq!(ToolName::new("").unwrap().as_str(), "");
    }

    #[test]
    fn tool_name_length_limit_counts_characters() {
        assert!(ToolName::new("é".repeat(MAX_TOOL_NAME_LEN)).is_ok());
        assert_eq!(
            ToolName::new("x".repeat(MAX_TOOL_NAME_LEN + 1)),
            Err(ValidationError::too_long("tools", MAX_TOOL_NAME_LEN))
        );
    }

    #[test]
    fn from_names_keeps_first_occurrence_order() {
        let set = ToolSet::from_names(["b", "a", "b", "c", "a"]).unwrap();
        assert_eq!(set.into_strings(), vec!["b", "a", "c"]);
    }

    #[test]
    fn from_names_accepts_empty_input() {
        let set = ToolSet::from_names(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set, ToolSet::empty());
    }

    #[test]
    fn from_names_keeps_empty_entry_once() {
        let set = ToolSet::from_names(["hammer", "", ""]).unwrap();
        assert_eq!(set.into_strings(), vec!["hammer", ""]);
    }

    #[test]
    fn from_names_rejects_overlong_entry() {
        let result = ToolSet::from_names(["hammer".to_string(), "x".repeat(300)]);
        assert!(matches!(result, Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn from_stored_skips_validation_and_dedups() {
        let long = "x".repeat(300);
        let set = ToolSet::from_stored(vec![String::new(), long.clone(), String::new()]);
        assert_eq!(set.into_strings(), vec![String::new(), long]);
    }

    #[test]
    fn contains_matches_exact_name() {
        let set = ToolSet::from_names(["hammer", "saw"]).unwrap();
        assert!(set.contains("saw"));
        assert!(!set.contains("Saw"));
    }

    #[test]
    fn serializes_as_string_array() {
        let set = ToolSet::from_names(["hammer", "saw"]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["hammer","saw"]"#);
        assert_eq!(serde_json::to_string(&ToolSet::empty()).unwrap(), "[]");
    }

    proptest! {
        #[test]
        fn from_names_never_yields_duplicates(names in prop::collection::vec("[a-d]{0,2}", 0..20)) {
            let set = ToolSet::from_names(names.clone()).unwrap();
            let unique: HashSet<_> = set.iter().collect();
            prop_assert_eq!(unique.len(), set.len());
            for name in &names {
                prop_assert!(set.contains(name));
            }
        }
    }
}
