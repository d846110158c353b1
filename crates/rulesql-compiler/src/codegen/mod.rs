//! Code generation module
//!
//! This module contains the code generators that turn rule trees into SQL
//! predicate fragments.

pub mod condition_codegen;
pub mod predicate_codegen;

// Re-export for convenience
pub use condition_codegen::ConditionRenderer;
pub use predicate_codegen::PredicateCompiler;
