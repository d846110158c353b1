//! RULESQL Parser - rule document parser
//!
//! Deserializes YAML or JSON rule documents into `rulesql_core` rule trees.
//!
//! # Document format
//!
//! ```yaml
//! version: "0.1"
//!
//! rule:
//!   op: and
//!   conditions:
//!     - property: Age
//!       operator: greaterOrEqual
//!       value:
//!         type: numeric
//!         text: "18"
//!   groups:
//!     - op: or
//!       conditions:
//!         - property: Name
//!           operator: equal
//!           value:
//!             text: Bob
//!         - property: MiddleName
//!           operator: isNull
//! ```
//!
//! A condition's right-hand side is either a `value` (typed literal, type
//! defaults to string when omitted), a `property2` (column-to-column
//! comparison), or absent (null checks only).

pub mod document;
pub mod error;
pub mod rule_parser;

// Re-export main types
pub use document::{ConditionNode, GroupNode, RuleDocument, ValueNode, ValueType};
pub use error::{ParseError, Result};
pub use rule_parser::RuleParser;
