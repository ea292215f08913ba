//! Name-based exclusion rules.
//!
//! Two independent lists drive exclusion: directory names that are pruned
//! during traversal, and node names that are kept out of the graph. Both
//! compare whole names, case-sensitively, with no pattern matching.

use std::collections::HashSet;

/// Directory names pruned during traversal when no override is given.
pub const DEFAULT_IGNORED_DIRS: [&str; 1] = ["Pods"];

/// Node names kept out of the graph when no override is given. Almost every
/// Objective-C class bottoms out at NSObject, so drawing it adds a hub node
/// that says nothing about the project.
pub const DEFAULT_IGNORED_NODES: [&str; 1] = ["NSObject"];

/// Exclusion policy shared by traversal and extraction.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    dirs: HashSet<String>,
    nodes: HashSet<String>,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_NODES)
    }
}

impl IgnorePolicy {
    /// Build a policy from explicit directory and node name lists.
    pub fn new<D, N>(dirs: D, nodes: N) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy that excludes nothing.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            nodes: HashSet::new(),
        }
    }

    /// Whether a directory with this name is pruned from traversal.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Whether a node with this name is kept out of the graph.
    pub fn is_ignored_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = IgnorePolicy::default();
        assert!(policy.is_ignored_dir("Pods"));
        assert!(policy.is_ignored_node("NSObject"));
        assert!(!policy.is_ignored_dir("Sources"));
        assert!(!policy.is_ignored_node("UIView"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let policy = IgnorePolicy::default();
        assert!(!policy.is_ignored_dir("pods"));
        assert!(!policy.is_ignored_node("nsobject"));
    }

    #[test]
    fn test_empty_policy() {
        let policy = IgnorePolicy::empty();
        assert!(!policy.is_ignored_dir("Pods"));
        assert!(!policy.is_ignored_node("NSObject"));
    }

    #[test]
    fn test_custom_lists_replace_defaults() {
        let policy = IgnorePolicy::new(["Carthage"], ["UIView"]);
        assert!(policy.is_ignored_dir("Carthage"));
        assert!(!policy.is_ignored_dir("Pods"));
        assert!(policy.is_ignored_node("UIView"));
        assert!(!policy.is_ignored_node("NSObject"));
    }
}
