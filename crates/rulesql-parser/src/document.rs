//! Rule document wire format
//!
//! Serde structs mirroring the on-disk document layout. These are kept
//! separate from the AST so the wire format can evolve without touching the
//! compiler; `RuleParser` converts between the two.

use rulesql_core::ast::{ComparisonOp, LogicalOp};
use serde::{Deserialize, Serialize};

/// Top-level rule document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Document format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Root group of the rule tree
    pub rule: GroupNode,
}

/// A logical group node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Logical operator joining the members ("and" / "or")
    pub op: LogicalOp,
    /// Leaf conditions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionNode>,
    /// Nested groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupNode>,
}

/// A leaf condition node
///
/// `value` and `property2` are mutually exclusive; a condition carrying
/// neither is valid only for null-check operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionNode {
    /// Left-hand property name
    pub property: String,
    /// Comparison operator wire name (e.g. "greaterOrEqual")
    pub operator: ComparisonOp,
    /// Literal right-hand operand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ValueNode>,
    /// Property right-hand operand (column-to-column comparison)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property2: Option<String>,
}

/// A literal value with an optional declared type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    /// Declared value type; a missing type means string
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// Raw literal text
    pub text: String,
}

/// Declared value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Numeric,
    Enumeration,
    String,
}
