//! Basic usage example for rulesql-compiler
//!
//! Run with: cargo run --example basic_usage

use rulesql_compiler::PredicateCompiler;
use rulesql_core::ast::{ComparisonOp, Condition, Group};
use rulesql_core::types::RuleValue;
use rulesql_parser::RuleParser;

fn main() -> anyhow::Result<()> {
    println!("=== rulesql Basic Usage Example ===\n");

    // Example 1: building a rule tree by hand
    println!("1. Hand-built rule tree:");
    let rule = Group::and()
        .with_condition(Condition::comparing(
            "Age".to_string(),
            ComparisonOp::GreaterOrEqual,
            RuleValue::numeric("18".to_string()),
        ))
        .with_group(
            Group::or()
                .with_condition(Condition::comparing(
                    "Name".to_string(),
                    ComparisonOp::Equal,
                    RuleValue::string("Bob".to_string()),
                ))
                .with_condition(Condition::comparing(
                    "Name".to_string(),
                    ComparisonOp::Equal,
                    RuleValue::string("Alice".to_string()),
                )),
        );

    let predicate = PredicateCompiler::compile(&rule)?;
    println!("   WHERE {}\n", predicate);

    // Example 2: parsing a YAML rule document
    println!("2. Parsed from a YAML document:");
    let yaml = r#"
rule:
  op: and
  conditions:
    - property: City
      operator: contains
      value:
        text: town
    - property: MiddleName
      operator: isNull
"#;

    let rule = RuleParser::parse(yaml)?;
    let predicate = PredicateCompiler::compile(&rule)?;
    println!("   WHERE {}\n", predicate);

    Ok(())
}
