//! Operators for rule conditions and groups

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators for leaf conditions
///
/// The set is closed and every variant has a fixed SQL rendering, so adding
/// or removing an operator is a compile-time-checked change rather than a
/// runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOp {
    /// Greater than or equal (>=)
    GreaterOrEqual,
    /// Greater than (>)
    Greater,
    /// Less than or equal (<=)
    LessOrEqual,
    /// Less than (<)
    Less,
    /// Equal (=)
    Equal,
    /// Not equal (<>)
    NotEqual,
    /// Substring match (LIKE '%v%')
    Contains,
    /// Negated substring match (NOT LIKE '%v%')
    DoesNotContain,
    /// First-character match (LEFT(p,1)='v')
    StartsWith,
    /// Negated first-character match
    DoesNotStartWith,
    /// Last-character match (RIGHT(p,1)='v')
    EndsWith,
    /// Negated last-character match
    DoesNotEndWith,
    /// Null check (IS NULL)
    IsNull,
    /// Negated null check (IS NOT NULL)
    IsNotNull,
}

impl ComparisonOp {
    /// SQL comparison symbol for relational kinds
    ///
    /// Pattern and null-check kinds render through templates instead of a
    /// bare symbol and return `None`.
    pub fn sql_symbol(&self) -> Option<&'static str> {
        match self {
            ComparisonOp::GreaterOrEqual => Some(">="),
            ComparisonOp::Greater => Some(">"),
            ComparisonOp::LessOrEqual => Some("<="),
            ComparisonOp::Less => Some("<"),
            ComparisonOp::Equal => Some("="),
            ComparisonOp::NotEqual => Some("<>"),
            ComparisonOp::Contains
            | ComparisonOp::DoesNotContain
            | ComparisonOp::StartsWith
            | ComparisonOp::DoesNotStartWith
            | ComparisonOp::EndsWith
            | ComparisonOp::DoesNotEndWith
            | ComparisonOp::IsNull
            | ComparisonOp::IsNotNull => None,
        }
    }

    /// Returns true for IS NULL / IS NOT NULL kinds
    pub fn is_null_check(&self) -> bool {
        matches!(self, ComparisonOp::IsNull | ComparisonOp::IsNotNull)
    }

    /// Returns true for substring kinds rendered with LIKE patterns
    pub fn is_substring(&self) -> bool {
        matches!(self, ComparisonOp::Contains | ComparisonOp::DoesNotContain)
    }

    /// Returns true for kinds anchored to the first or last character
    pub fn is_anchored(&self) -> bool {
        matches!(
            self,
            ComparisonOp::StartsWith
                | ComparisonOp::DoesNotStartWith
                | ComparisonOp::EndsWith
                | ComparisonOp::DoesNotEndWith
        )
    }

    /// Wire name as it appears in rule documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::GreaterOrEqual => "greaterOrEqual",
            ComparisonOp::Greater => "greater",
            ComparisonOp::LessOrEqual => "lessOrEqual",
            ComparisonOp::Less => "less",
            ComparisonOp::Equal => "equal",
            ComparisonOp::NotEqual => "notEqual",
            ComparisonOp::Contains => "contains",
            ComparisonOp::DoesNotContain => "doesNotContain",
            ComparisonOp::StartsWith => "startsWith",
            ComparisonOp::DoesNotStartWith => "doesNotStartWith",
            ComparisonOp::EndsWith => "endsWith",
            ComparisonOp::DoesNotEndWith => "doesNotEndWith",
            ComparisonOp::IsNull => "isNull",
            ComparisonOp::IsNotNull => "isNotNull",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greaterOrEqual" => Ok(ComparisonOp::GreaterOrEqual),
            "greater" => Ok(ComparisonOp::Greater),
            "lessOrEqual" => Ok(ComparisonOp::LessOrEqual),
            "less" => Ok(ComparisonOp::Less),
            "equal" => Ok(ComparisonOp::Equal),
            "notEqual" => Ok(ComparisonOp::NotEqual),
            "contains" => Ok(ComparisonOp::Contains),
            "doesNotContain" => Ok(ComparisonOp::DoesNotContain),
            "startsWith" => Ok(ComparisonOp::StartsWith),
            "doesNotStartWith" => Ok(ComparisonOp::DoesNotStartWith),
            "endsWith" => Ok(ComparisonOp::EndsWith),
            "doesNotEndWith" => Ok(ComparisonOp::DoesNotEndWith),
            "isNull" => Ok(ComparisonOp::IsNull),
            "isNotNull" => Ok(ComparisonOp::IsNotNull),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

/// Logical operators joining the members of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    /// All members must hold
    And,
    /// At least one member must hold
    Or,
}

impl LogicalOp {
    /// SQL keyword for this operator
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_symbol_relational() {
        assert_eq!(ComparisonOp::GreaterOrEqual.sql_symbol(), Some(">="));
        assert_eq!(ComparisonOp::Greater.sql_symbol(), Some(">"));
        assert_eq!(ComparisonOp::LessOrEqual.sql_symbol(), Some("<="));
        assert_eq!(ComparisonOp::Less.sql_symbol(), Some("<"));
        assert_eq!(ComparisonOp::Equal.sql_symbol(), Some("="));
        assert_eq!(ComparisonOp::NotEqual.sql_symbol(), Some("<>"));
    }

    #[test]
    fn test_sql_symbol_none_for_templates() {
        assert_eq!(ComparisonOp::Contains.sql_symbol(), None);
        assert_eq!(ComparisonOp::StartsWith.sql_symbol(), None);
        assert_eq!(ComparisonOp::IsNull.sql_symbol(), None);
    }

    #[test]
    fn test_is_null_check() {
        assert!(ComparisonOp::IsNull.is_null_check());
        assert!(ComparisonOp::IsNotNull.is_null_check());
        assert!(!ComparisonOp::Equal.is_null_check());
        assert!(!ComparisonOp::Contains.is_null_check());
    }

    #[test]
    fn test_is_substring() {
        assert!(ComparisonOp::Contains.is_substring());
        assert!(ComparisonOp::DoesNotContain.is_substring());
        assert!(!ComparisonOp::StartsWith.is_substring());
    }

    #[test]
    fn test_is_anchored() {
        assert!(ComparisonOp::StartsWith.is_anchored());
        assert!(ComparisonOp::DoesNotEndWith.is_anchored());
        assert!(!ComparisonOp::Contains.is_anchored());
        assert!(!ComparisonOp::Less.is_anchored());
    }

    #[test]
    fn test_from_str_round_trip() {
        let ops = [
            ComparisonOp::GreaterOrEqual,
            ComparisonOp::Greater,
            ComparisonOp::LessOrEqual,
            ComparisonOp::Less,
            ComparisonOp::Equal,
            ComparisonOp::NotEqual,
            ComparisonOp::Contains,
            ComparisonOp::DoesNotContain,
            ComparisonOp::StartsWith,
            ComparisonOp::DoesNotStartWith,
            ComparisonOp::EndsWith,
            ComparisonOp::DoesNotEndWith,
            ComparisonOp::IsNull,
            ComparisonOp::IsNotNull,
        ];

        for op in ops {
            assert_eq!(op.as_str().parse::<ComparisonOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "between".parse::<ComparisonOp>();
        assert!(matches!(result, Err(CoreError::InvalidOperator(_))));
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&ComparisonOp::GreaterOrEqual).unwrap();
        assert_eq!(json, r#""greaterOrEqual""#);

        let op: ComparisonOp = serde_json::from_str(r#""doesNotStartWith""#).unwrap();
        assert_eq!(op, ComparisonOp::DoesNotStartWith);
    }

    #[test]
    fn test_logical_op_keyword() {
        assert_eq!(LogicalOp::And.keyword(), "AND");
        assert_eq!(LogicalOp::Or.keyword(), "OR");
    }

    #[test]
    fn test_logical_op_serde() {
        let op: LogicalOp = serde_json::from_str(r#""and""#).unwrap();
        assert_eq!(op, LogicalOp::And);
        let op: LogicalOp = serde_json::from_str(r#""or""#).unwrap();
        assert_eq!(op, LogicalOp::Or);
    }
}
