//! Rule document parser
//!
//! Converts deserialized rule documents into `rulesql_core` rule trees,
//! validating condition structure along the way.

use crate::document::{ConditionNode, GroupNode, RuleDocument, ValueNode, ValueType};
use crate::error::{ParseError, Result};
use rulesql_core::ast::{Condition, Group, Operand};
use rulesql_core::types::RuleValue;

/// Rule document parser
pub struct RuleParser;

impl RuleParser {
    /// Parse a YAML rule document into a rule tree
    pub fn parse(yaml: &str) -> Result<Group> {
        let document: RuleDocument = serde_yaml::from_str(yaml)?;
        Self::build(&document)
    }

    /// Parse a JSON rule document into a rule tree
    pub fn parse_json(json: &str) -> Result<Group> {
        let document: RuleDocument = serde_json::from_str(json)?;
        Self::build(&document)
    }

    /// Convert an already-deserialized document into a rule tree
    pub fn build(document: &RuleDocument) -> Result<Group> {
        Self::build_group(&document.rule, "rule")
    }

    fn build_group(node: &GroupNode, path: &str) -> Result<Group> {
        let mut group = Group::new(node.op);

        for (idx, condition) in node.conditions.iter().enumerate() {
            let condition_path = format!("{}.conditions[{}]", path, idx);
            group
                .conditions
                .push(Self::build_condition(condition, &condition_path)?);
        }

        for (idx, child) in node.groups.iter().enumerate() {
            let child_path = format!("{}.groups[{}]", path, idx);
            group.groups.push(Self::build_group(child, &child_path)?);
        }

        Ok(group)
    }

    fn build_condition(node: &ConditionNode, path: &str) -> Result<Condition> {
        let operand = match (&node.value, &node.property2) {
            (Some(_), Some(_)) => {
                return Err(Self::invalid_condition(
                    path,
                    "a condition may carry either a value or a second property, not both",
                ));
            }
            (Some(value), None) => Some(Operand::Value(Self::build_value(value))),
            (None, Some(property)) => Some(Operand::Property(property.clone())),
            (None, None) => None,
        };

        // only null checks are unary; everything else needs a right-hand side
        if operand.is_none() && !node.operator.is_null_check() {
            return Err(Self::invalid_condition(
                path,
                &format!("operator '{}' needs a right-hand operand", node.operator),
            ));
        }

        Ok(Condition {
            property: node.property.clone(),
            operator: node.operator,
            operand,
        })
    }

    fn build_value(node: &ValueNode) -> RuleValue {
        // a missing declared type means string
        match node.value_type.unwrap_or(ValueType::String) {
            ValueType::Boolean => RuleValue::Boolean(node.text.clone()),
            ValueType::Numeric => RuleValue::Numeric(node.text.clone()),
            ValueType::Enumeration => RuleValue::Enumeration(node.text.clone()),
            ValueType::String => RuleValue::String(node.text.clone()),
        }
    }

    fn invalid_condition(path: &str, message: &str) -> ParseError {
        log::error!("Condition validation error at {}: {}", path, message);
        ParseError::InvalidCondition {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}
