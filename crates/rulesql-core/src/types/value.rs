//! Typed literal values for rule conditions
//!
//! Literals keep the raw text from the source document. The SQL renderer
//! substitutes that text directly into the output, so no numeric parsing or
//! reformatting happens here.

use serde::{Deserialize, Serialize};

/// A literal value carrying its raw textual representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleValue {
    /// Boolean literal
    Boolean(String),
    /// Numeric literal, rendered unquoted
    Numeric(String),
    /// Enumeration code, rendered unquoted
    Enumeration(String),
    /// String literal, rendered single-quoted
    ///
    /// This is the default when a document declares no value type.
    String(String),
}

impl RuleValue {
    /// Create a boolean literal
    pub fn boolean(raw: String) -> Self {
        RuleValue::Boolean(raw)
    }

    /// Create a numeric literal
    pub fn numeric(raw: String) -> Self {
        RuleValue::Numeric(raw)
    }

    /// Create an enumeration literal
    pub fn enumeration(raw: String) -> Self {
        RuleValue::Enumeration(raw)
    }

    /// Create a string literal
    pub fn string(raw: String) -> Self {
        RuleValue::String(raw)
    }

    /// Raw text as written in the source document
    pub fn raw(&self) -> &str {
        match self {
            RuleValue::Boolean(raw)
            | RuleValue::Numeric(raw)
            | RuleValue::Enumeration(raw)
            | RuleValue::String(raw) => raw,
        }
    }
}
