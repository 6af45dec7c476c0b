use thiserror::Error;

/// Failures raised by the containers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("{container} is empty")]
    EmptyContainer { container: &'static str },
    #[error("hash table needs at least one bucket, got {0}")]
    InvalidBucketCount(usize),
}

/// Failures raised while evaluating an infix expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("operator `{0}` is missing an operand")]
    InsufficientOperands(char),
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("unexpected character `{ch}` at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    #[error("expression is empty")]
    EmptyExpression,
    #[error("{0} operands left without an operator")]
    DanglingOperands(usize),
}
