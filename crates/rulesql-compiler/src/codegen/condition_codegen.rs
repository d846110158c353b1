//! Condition renderer
//!
//! Renders a single leaf condition into a SQL boolean fragment. Each
//! comparison kind has a fixed rendering; dispatch is an exhaustive match,
//! so an unhandled kind is a compile error here rather than a runtime
//! lookup failure.

use crate::error::{CompileError, Result};
use rulesql_core::ast::{ComparisonOp, Condition, Operand};
use rulesql_core::types::RuleValue;

/// Condition renderer
pub struct ConditionRenderer;

impl ConditionRenderer {
    /// Render one condition into a SQL fragment
    pub fn render(condition: &Condition) -> Result<String> {
        match condition.operator {
            ComparisonOp::Contains => Self::render_substring(condition, "LIKE"),
            ComparisonOp::DoesNotContain => Self::render_substring(condition, "NOT LIKE"),

            ComparisonOp::StartsWith => Self::render_anchored(condition, "LEFT", "="),
            ComparisonOp::DoesNotStartWith => Self::render_anchored(condition, "LEFT", "<>"),
            ComparisonOp::EndsWith => Self::render_anchored(condition, "RIGHT", "="),
            ComparisonOp::DoesNotEndWith => Self::render_anchored(condition, "RIGHT", "<>"),

            ComparisonOp::IsNull => Self::render_null_check(condition, "IS NULL"),
            ComparisonOp::IsNotNull => Self::render_null_check(condition, "IS NOT NULL"),

            ComparisonOp::GreaterOrEqual
            | ComparisonOp::Greater
            | ComparisonOp::LessOrEqual
            | ComparisonOp::Less
            | ComparisonOp::Equal
            | ComparisonOp::NotEqual => Self::render_relational(condition),
        }
    }

    /// LIKE / NOT LIKE with the value spliced into a '%...%' pattern
    fn render_substring(condition: &Condition, keyword: &str) -> Result<String> {
        let property = Self::require_property(condition)?;
        let value = Self::require_literal(condition)?;
        Ok(format!("{} {} '%{}%'", property, keyword, value.raw()))
    }

    /// LEFT / RIGHT single-character comparison
    ///
    /// Only the first (or last) character of the property participates,
    /// whatever the value length.
    fn render_anchored(condition: &Condition, side: &str, comparison: &str) -> Result<String> {
        let property = Self::require_property(condition)?;
        let value = Self::require_literal(condition)?;
        Ok(format!(
            "{}({},1){}'{}'",
            side,
            property,
            comparison,
            value.raw()
        ))
    }

    /// IS NULL / IS NOT NULL; any operand is meaningless for a unary check
    /// and ignored
    fn render_null_check(condition: &Condition, keyword: &str) -> Result<String> {
        let property = Self::require_property(condition)?;
        Ok(format!("{} {}", property, keyword))
    }

    /// Relational comparison, branching on the operand shape
    fn render_relational(condition: &Condition) -> Result<String> {
        let symbol = match condition.operator.sql_symbol() {
            Some(symbol) => symbol,
            None => {
                return Err(CompileError::UnsupportedOperator(format!(
                    "operator '{}' has no relational SQL form",
                    condition.operator
                )))
            }
        };

        match &condition.operand {
            None => Err(CompileError::MissingOperand {
                property: condition.property.clone(),
                operator: condition.operator,
            }),
            Some(Operand::Property(other)) => {
                let property = Self::require_property(condition)?;
                Ok(format!("{} {} {}", property, symbol, other))
            }
            Some(Operand::Value(value)) => Self::render_literal(condition, symbol, value),
        }
    }

    fn render_literal(condition: &Condition, symbol: &str, value: &RuleValue) -> Result<String> {
        match value {
            // boolean literals always compare against 1, whatever their
            // text; an empty property name stands in for the constant
            // placeholder ("1 = 1")
            RuleValue::Boolean(_) => {
                let lhs = if condition.property.is_empty() {
                    "1"
                } else {
                    condition.property.as_str()
                };
                Ok(format!("{} {} 1", lhs, symbol))
            }
            RuleValue::Numeric(raw) | RuleValue::Enumeration(raw) => {
                let property = Self::require_property(condition)?;
                Ok(format!("{} {} {}", property, symbol, raw))
            }
            RuleValue::String(raw) => {
                let property = Self::require_property(condition)?;
                Ok(format!("{} {} '{}'", property, symbol, raw))
            }
        }
    }

    /// Literal operand, or the matching error for the condition's shape
    fn require_literal(condition: &Condition) -> Result<&RuleValue> {
        match &condition.operand {
            Some(Operand::Value(value)) => Ok(value),
            Some(Operand::Property(_)) => Err(CompileError::UnsupportedOperator(format!(
                "operator '{}' cannot compare two properties",
                condition.operator
            ))),
            None => Err(CompileError::MissingOperand {
                property: condition.property.clone(),
                operator: condition.operator,
            }),
        }
    }

    /// Property name, rejecting the empty placeholder
    fn require_property(condition: &Condition) -> Result<&str> {
        if condition.property.is_empty() {
            return Err(CompileError::MalformedCondition(format!(
                "operator '{}' needs a property name",
                condition.operator
            )));
        }
        Ok(&condition.property)
    }
}
