mod infix_converter;

use crate::calculator::error::SyntaxError;
use crate::calculator::parser::infix_converter::infix_to_postfix;
use crate::calculator::token::Token;

/// Reorders the given infix tokens into postfix (reverse Polish) order,
/// resolving operator precedence and parenthesis nesting.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format.
///
/// returns: The equivalent postfix token sequence, free of parentheses.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_calculator::calculator::parser::convert;
/// use expression_calculator::calculator::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     "+".parse().unwrap(),
///     Token::Number(3.0),
/// ];
/// let postfix_tokens = convert(infix_tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    infix_to_postfix(infix_tokens)
}
