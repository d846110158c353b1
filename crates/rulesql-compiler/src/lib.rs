//! RULESQL Compiler - rule tree to SQL predicate compiler
//!
//! Compiles a rule tree (`rulesql_core::ast::Group`) into a SQL boolean
//! predicate string suitable for splicing after `WHERE`.
//!
//! ```
//! use rulesql_compiler::PredicateCompiler;
//! use rulesql_core::ast::{ComparisonOp, Condition, Group};
//! use rulesql_core::types::RuleValue;
//!
//! let rule = Group::and().with_condition(Condition::comparing(
//!     "Age".to_string(),
//!     ComparisonOp::GreaterOrEqual,
//!     RuleValue::numeric("18".to_string()),
//! ));
//!
//! let predicate = PredicateCompiler::compile(&rule).unwrap();
//! assert_eq!(predicate, "Age >= 18");
//! ```
//!
//! # Security
//!
//! Literal values are substituted into the output as raw text with no
//! escaping or parameterization. Callers feeding documents from untrusted
//! sources must treat the produced predicate as untrusted and apply
//! parameterized-query boundaries or escaping before execution.

pub mod codegen;
pub mod error;

// Re-export main types
pub use codegen::{ConditionRenderer, PredicateCompiler};
pub use error::{CompileError, Result};
