use crate::calculator::error::LexError;
use crate::calculator::operator::BinaryOperator;
use crate::calculator::token::Token;
use itertools::Itertools;
use std::iter::Peekable;
use std::str::CharIndices;

/// Scans the given expression text into an ordered sequence of tokens.
///
/// Whitespace is skipped and never produces a token; it terminates a number,
/// so `2 3` scans as two separate numbers.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in scanning order.
///
/// # Examples
///
/// ```
/// use expression_calculator::calculator::lexer::tokenize;
///
/// let tokens = tokenize("1.5 + (2 * 3)")?;
/// assert_eq!(tokens.len(), 7);
/// # Ok::<(), expression_calculator::calculator::error::LexError>(())
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut characters = expression.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some(&(position, character)) = characters.peek() {
        match character {
            character if character.is_whitespace() => {
                characters.next();
            }
            character if character.is_ascii_digit() => {
                tokens.push(scan_number(&mut characters, position)?);
            }
            '+' => {
                characters.next();
                tokens.push(Token::Operator(BinaryOperator::Add));
            }
            '-' => {
                characters.next();
                tokens.push(Token::Operator(BinaryOperator::Subtract));
            }
            '*' => {
                characters.next();
                tokens.push(Token::Operator(BinaryOperator::Multiply));
            }
            '/' => {
                characters.next();
                tokens.push(Token::Operator(BinaryOperator::Divide));
            }
            '(' => {
                characters.next();
                tokens.push(Token::OpenParenthesis);
            }
            ')' => {
                characters.next();
                tokens.push(Token::CloseParenthesis);
            }
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character,
                    position,
                })
            }
        }
    }

    Ok(tokens)
}

/// Consumes a maximal run of digits and decimal points beginning at `start`.
fn scan_number(
    characters: &mut Peekable<CharIndices<'_>>,
    start: usize,
) -> Result<Token, LexError> {
    let text: String = characters
        .peeking_take_while(|&(_, character)| character.is_ascii_digit() || character == '.')
        .map(|(_, character)| character)
        .collect();

    if text.matches('.').count() > 1 {
        return Err(LexError::MalformedNumber { position: start });
    }

    let value = text
        .parse::<f64>()
        .map_err(|_| LexError::MalformedNumber { position: start })?;
    Ok(Token::Number(value))
}
