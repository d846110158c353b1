//! Group AST nodes

use super::condition::Condition;
use super::operator::LogicalOp;
use serde::{Deserialize, Serialize};

/// Internal tree node combining conditions and nested groups with AND or OR
///
/// Members are kept in document order: leaf conditions first, then nested
/// groups. Ownership makes the tree acyclic by construction, so traversal
/// needs no cycle detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Logical operator joining the members
    pub operator: LogicalOp,
    /// Leaf conditions, in document order
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Nested groups, in document order
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Group {
    /// Create an empty group with the given operator
    pub fn new(operator: LogicalOp) -> Self {
        Self {
            operator,
            conditions: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Create an empty AND group
    pub fn and() -> Self {
        Self::new(LogicalOp::And)
    }

    /// Create an empty OR group
    pub fn or() -> Self {
        Self::new(LogicalOp::Or)
    }

    /// Add a leaf condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a nested group
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// True when the group holds no conditions and no nested groups
    ///
    /// Empty groups compile to the empty fragment and are skipped by the
    /// predicate compiler.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.groups.is_empty()
    }
}
