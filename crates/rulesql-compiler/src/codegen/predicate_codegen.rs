//! Predicate compiler
//!
//! Recursively compiles a group tree into a single SQL boolean predicate.
//! Every call returns an owned fragment and sibling fragments are joined
//! with the group operator between elements, so no trailing separator can
//! appear and independent trees may be compiled concurrently.

use super::condition_codegen::ConditionRenderer;
use crate::error::Result;
use rulesql_core::ast::{Group, LogicalOp};

/// Predicate compiler
pub struct PredicateCompiler;

impl PredicateCompiler {
    /// Compile a rule tree into a SQL boolean predicate
    ///
    /// The returned string is suitable for splicing after `WHERE`. An
    /// entirely empty tree compiles to the empty string.
    pub fn compile(root: &Group) -> Result<String> {
        let predicate = Self::compile_group(root)?;
        tracing::debug!("Generated SQL predicate: {}", predicate);
        Ok(predicate)
    }

    /// Compile one group into an unwrapped fragment
    fn compile_group(group: &Group) -> Result<String> {
        let mut fragments = Vec::with_capacity(group.conditions.len() + group.groups.len());

        for condition in &group.conditions {
            fragments.push(ConditionRenderer::render(condition)?);
        }

        for child in &group.groups {
            let fragment = Self::compile_group(child)?;
            // empty groups compile to nothing and must not leave "()" behind
            if fragment.is_empty() {
                continue;
            }
            fragments.push(Self::wrap(group.operator, child.operator, fragment));
        }

        let separator = format!(" {} ", group.operator.keyword());
        Ok(fragments.join(&separator))
    }

    /// Parenthesize a child fragment where precedence requires it
    ///
    /// AND binds tighter than OR in SQL, so an OR child spliced into an AND
    /// parent keeps its own parentheses. Children of an OR parent are always
    /// wrapped. An AND child under an AND parent splices bare.
    fn wrap(parent: LogicalOp, child: LogicalOp, fragment: String) -> String {
        match (parent, child) {
            (LogicalOp::Or, _) | (LogicalOp::And, LogicalOp::Or) => format!("({})", fragment),
            (LogicalOp::And, LogicalOp::And) => fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompileError;
    use rulesql_core::ast::{ComparisonOp, Condition};
    use rulesql_core::types::RuleValue;

    fn age_at_least_18() -> Condition {
        Condition::comparing(
            "Age".to_string(),
            ComparisonOp::GreaterOrEqual,
            RuleValue::Numeric("18".to_string()),
        )
    }

    fn name_equals(name: &str) -> Condition {
        Condition::comparing(
            "Name".to_string(),
            ComparisonOp::Equal,
            RuleValue::String(name.to_string()),
        )
    }

    #[test]
    fn test_single_condition() {
        let rule = Group::and().with_condition(age_at_least_18());
        assert_eq!(PredicateCompiler::compile(&rule).unwrap(), "Age >= 18");
    }

    #[test]
    fn test_flat_and_group() {
        let rule = Group::and()
            .with_condition(age_at_least_18())
            .with_condition(name_equals("Bob"));

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "Age >= 18 AND Name = 'Bob'"
        );
    }

    #[test]
    fn test_or_child_under_and_parent_is_wrapped() {
        let rule = Group::and().with_condition(age_at_least_18()).with_group(
            Group::or()
                .with_condition(name_equals("Bob"))
                .with_condition(name_equals("Alice")),
        );

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "Age >= 18 AND (Name = 'Bob' OR Name = 'Alice')"
        );
    }

    #[test]
    fn test_and_child_under_and_parent_splices_bare() {
        let rule = Group::and().with_condition(age_at_least_18()).with_group(
            Group::and()
                .with_condition(name_equals("Bob"))
                .with_condition(Condition::null_check(
                    "MiddleName".to_string(),
                    ComparisonOp::IsNotNull,
                )),
        );

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "Age >= 18 AND Name = 'Bob' AND MiddleName IS NOT NULL"
        );
    }

    #[test]
    fn test_children_of_or_parent_are_always_wrapped() {
        let rule = Group::or()
            .with_condition(name_equals("Bob"))
            .with_group(
                Group::and()
                    .with_condition(age_at_least_18())
                    .with_condition(name_equals("Alice")),
            )
            .with_group(
                Group::or()
                    .with_condition(name_equals("Carol"))
                    .with_condition(name_equals("Dan")),
            );

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "Name = 'Bob' OR (Age >= 18 AND Name = 'Alice') OR (Name = 'Carol' OR Name = 'Dan')"
        );
    }

    #[test]
    fn test_sibling_groups_under_and_parent_keep_separator() {
        let rule = Group::and()
            .with_group(
                Group::or()
                    .with_condition(name_equals("Bob"))
                    .with_condition(name_equals("Alice")),
            )
            .with_group(
                Group::or()
                    .with_condition(name_equals("Carol"))
                    .with_condition(name_equals("Dan")),
            );

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "(Name = 'Bob' OR Name = 'Alice') AND (Name = 'Carol' OR Name = 'Dan')"
        );
    }

    #[test]
    fn test_empty_group_compiles_to_empty_string() {
        assert_eq!(PredicateCompiler::compile(&Group::and()).unwrap(), "");
        assert_eq!(PredicateCompiler::compile(&Group::or()).unwrap(), "");
    }

    #[test]
    fn test_empty_child_group_is_skipped() {
        let rule = Group::and()
            .with_condition(age_at_least_18())
            .with_group(Group::or())
            .with_condition(name_equals("Bob"));

        let predicate = PredicateCompiler::compile(&rule).unwrap();
        assert_eq!(predicate, "Age >= 18 AND Name = 'Bob'");
        assert!(!predicate.contains("()"));
    }

    #[test]
    fn test_deeply_nested_empty_groups_leave_no_trace() {
        let rule = Group::or()
            .with_condition(name_equals("Bob"))
            .with_group(Group::and().with_group(Group::or()));

        assert_eq!(PredicateCompiler::compile(&rule).unwrap(), "Name = 'Bob'");
    }

    #[test]
    fn test_no_trailing_separator() {
        let rule = Group::or()
            .with_condition(name_equals("Bob"))
            .with_condition(name_equals("Alice"));

        let predicate = PredicateCompiler::compile(&rule).unwrap();
        assert!(!predicate.ends_with(" OR "));
        assert!(!predicate.ends_with(" AND "));
        assert_eq!(predicate, "Name = 'Bob' OR Name = 'Alice'");
    }

    #[test]
    fn test_three_levels_of_nesting() {
        // Age >= 18 AND (Name = 'Bob' OR (Age >= 18 AND Name = 'Alice'))
        let rule = Group::and().with_condition(age_at_least_18()).with_group(
            Group::or().with_condition(name_equals("Bob")).with_group(
                Group::and()
                    .with_condition(age_at_least_18())
                    .with_condition(name_equals("Alice")),
            ),
        );

        assert_eq!(
            PredicateCompiler::compile(&rule).unwrap(),
            "Age >= 18 AND (Name = 'Bob' OR (Age >= 18 AND Name = 'Alice'))"
        );
    }

    #[test]
    fn test_condition_error_propagates() {
        let rule = Group::and()
            .with_condition(age_at_least_18())
            .with_condition(Condition::null_check(
                "Name".to_string(),
                ComparisonOp::Equal,
            ));

        assert!(matches!(
            PredicateCompiler::compile(&rule),
            Err(CompileError::MissingOperand { .. })
        ));
    }
}
