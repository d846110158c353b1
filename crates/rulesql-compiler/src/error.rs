//! Compiler error types

use rulesql_core::ast::ComparisonOp;
use thiserror::Error;

/// Compiler error
///
/// All errors are fail-fast: compilation aborts on the first malformed
/// condition rather than emitting a partial predicate.
#[derive(Error, Debug)]
pub enum CompileError {
    /// Operator cannot render the requested comparison shape
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Non-null-check operator with no right-hand operand
    #[error("Missing right-hand operand for operator '{operator}' on property '{property}'")]
    MissingOperand {
        property: String,
        operator: ComparisonOp,
    },

    /// Required property name absent or empty
    #[error("Malformed condition: {0}")]
    MalformedCondition(String),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
