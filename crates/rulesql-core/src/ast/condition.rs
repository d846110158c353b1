//! Condition AST nodes

use super::operator::ComparisonOp;
use crate::types::RuleValue;
use serde::{Deserialize, Serialize};

/// Right-hand operand of a condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Typed literal value
    Value(RuleValue),
    /// Another property, compared column-to-column
    Property(String),
}

/// Leaf predicate comparing one property to a value, another property, or
/// checking null-ness
///
/// A condition with no operand is only meaningful for the null-check
/// operators; the compiler rejects any other operator without a right-hand
/// side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Left-hand property name
    pub property: String,
    /// Comparison kind
    pub operator: ComparisonOp,
    /// Right-hand operand; `None` only for null checks
    pub operand: Option<Operand>,
}

impl Condition {
    /// Compare a property against a literal value
    pub fn comparing(property: String, operator: ComparisonOp, value: RuleValue) -> Self {
        Self {
            property,
            operator,
            operand: Some(Operand::Value(value)),
        }
    }

    /// Compare a property against another property
    pub fn against_property(property: String, operator: ComparisonOp, other: String) -> Self {
        Self {
            property,
            operator,
            operand: Some(Operand::Property(other)),
        }
    }

    /// Null-check a property (IS NULL / IS NOT NULL)
    pub fn null_check(property: String, operator: ComparisonOp) -> Self {
        Self {
            property,
            operator,
            operand: None,
        }
    }
}
