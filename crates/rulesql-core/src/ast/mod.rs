//! Abstract Syntax Tree (AST) definitions for rule trees
//!
//! This module contains the AST node definitions for:
//! - Logical groups (AND/OR internal nodes)
//! - Leaf conditions
//! - Comparison and logical operators

pub mod condition;
pub mod group;
pub mod operator;

pub use condition::{Condition, Operand};
pub use group::Group;
pub use operator::{ComparisonOp, LogicalOp};
