use thiserror::Error;

/// Failures detected while scanning the raw expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("number at position {position} has more than one decimal point")]
    MalformedNumber { position: usize },
}

/// Failures detected while reordering tokens into postfix form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("parentheses are unbalanced")]
    UnbalancedParen,
    #[error("two operands appear with no operator between them")]
    MissingOperator,
}

/// Everything that can go wrong while evaluating an expression.
///
/// Lexing and syntax failures are folded into this taxonomy so callers of
/// [`calculate`](crate::calculator::calculate) handle a single error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("number at position {position} has more than one decimal point")]
    MalformedNumber { position: usize },
    #[error("parentheses are unbalanced")]
    UnbalancedParen,
    #[error("an operator is missing one or both of its operands")]
    InsufficientOperands,
    #[error("expression does not reduce to a single value")]
    MalformedExpression,
    #[error("cannot divide by zero")]
    DivisionByZero,
}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        match error {
            LexError::UnexpectedCharacter {
                character,
                position,
            } => EvalError::UnexpectedCharacter {
                character,
                position,
            },
            LexError::MalformedNumber { position } => EvalError::MalformedNumber { position },
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(error: SyntaxError) -> Self {
        match error {
            SyntaxError::UnbalancedParen => EvalError::UnbalancedParen,
            SyntaxError::MissingOperator => EvalError::MalformedExpression,
        }
    }
}
