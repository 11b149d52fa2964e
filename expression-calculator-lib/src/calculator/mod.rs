pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::calculator::error::EvalError;
use crate::calculator::token::Token;
use crate::debug;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given arithmetic expression.
///
/// The expression is scanned into tokens, reordered into postfix form and
/// reduced to a single value. The pipeline stops at the first failure; no
/// partial result is ever produced.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use expression_calculator::calculator::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let result = calculate("(2 + 3) * 4")?;
/// assert_eq!(result, 20.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::convert(tokens)?;
    debug!(&postfix_tokens);
    evaluator::evaluate(postfix_tokens)
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// Numbers and operators are separated by single spaces; parentheses hug
/// their neighbours.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_calculator::calculator::tokens_to_string;
/// use expression_calculator::calculator::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(2.0),
///     Token::Number(3.0),
///     "+".parse().unwrap(),
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 3 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) | Token::Operator(_) => {
                builder.append(token.to_string());
                builder.append(" ");
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                builder.append(token.to_string());
            }
        }
    }

    let text = builder.string().context("Failed to build token string")?;
    Ok(text.trim_end().to_string())
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
