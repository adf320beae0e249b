//! Item categories.
//!
//! The set of valid labels is configuration: callers build a [`CategorySet`]
//! once and validate every [`Category`] against it.

use serde::Serialize;

use crate::error::{Result, TodoError};

/// Labels accepted when no other set is configured.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Work", "Personal", "Health", "Education"];

/// The closed set of category labels an item may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a set from labels, trimming them and dropping duplicates.
    ///
    /// Fails if a label is blank or the set ends up empty.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            let label = label.trim();
            if label.is_empty() {
                return Err(TodoError::validation("Category cannot be empty"));
            }
            if !set.iter().any(|l| l == label) {
                set.push(label.to_string());
            }
        }
        if set.is_empty() {
            return Err(TodoError::validation("At least one category is required"));
        }
        Ok(Self { labels: set })
    }

    /// Whether `label` is a member (exact, case-sensitive).
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels in configuration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A category label validated against a [`CategorySet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Validate `value` against `valid`.
    pub fn parse(value: &str, valid: &CategorySet) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(TodoError::validation("Category cannot be empty"));
        }
        if !valid.contains(value) {
            return Err(TodoError::validation(format!(
                "Invalid category: {}. Valid categories are: {}",
                value,
                valid.labels().join(", ")
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// The label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = CategorySet::default();
        assert_eq!(set.labels(), &["Work", "Personal", "Health", "Education"]);
        assert!(Category::parse("Work", &set).is_ok());
    }

    #[test]
    fn test_invalid_category() {
        let err = Category::parse("InvalidCategory", &CategorySet::default()).unwrap_err();
        match err {
            TodoError::Validation(msg) => {
                assert!(msg.contains("InvalidCategory"));
                assert!(msg.contains("Work, Personal, Health, Education"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_case() {
        let set = CategorySet::default();
        assert!(Category::parse("  ", &set).is_err());
        assert!(Category::parse("work", &set).is_err());
    }

    #[test]
    fn test_custom_set() {
        let set = CategorySet::new(["Chores", " Garden ", "Chores"]).unwrap();
        assert_eq!(set.labels(), &["Chores", "Garden"]);
        assert!(Category::parse("Garden", &set).is_ok());
        assert!(Category::parse("Work", &set).is_err());
    }

    #[test]
    fn test_set_rejects_blank_or_empty() {
        assert!(CategorySet::new(["Work", ""]).is_err());
        assert!(CategorySet::new(Vec::<String>::new()).is_err());
    }
}
