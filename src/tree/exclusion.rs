//! Exclusion set: literal entry names that are never printed or entered

use std::collections::HashSet;

/// Names skipped when no exclusion list is configured
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "node_modules", ".next", "dist", "build", ".vscode"];

/// Immutable set of excluded entry names (exact match, no patterns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from the given names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that excludes nothing
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Return a new set that also contains `extra`
    pub fn with<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}
