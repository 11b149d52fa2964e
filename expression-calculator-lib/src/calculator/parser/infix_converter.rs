use crate::calculator::error::SyntaxError;
use crate::calculator::operator::{Associativity, BinaryOperator};
use crate::calculator::token::Token;
use std::collections::VecDeque;

/// An entry on the operator stack. Only operators and open parentheses are
/// ever stacked, so numbers on the stack are unrepresentable.
enum StackedToken {
    Operator(BinaryOperator),
    OpenParenthesis,
}

pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<StackedToken> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    let mut previous_ended_operand = false;

    while let Some(token) = tokens.pop_front() {
        // One token of lookbehind: an operand may not directly follow a
        // completed operand, as in `2 3 +` or `(1)(2)`.
        if previous_ended_operand && begins_operand(&token) {
            return Err(SyntaxError::MissingOperator);
        }
        previous_ended_operand = ends_operand(&token);

        match token {
            Token::Number(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(StackedToken::OpenParenthesis),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn begins_operand(token: &Token) -> bool {
    matches!(token, Token::Number(_) | Token::OpenParenthesis)
}

fn ends_operand(token: &Token) -> bool {
    matches!(token, Token::Number(_) | Token::CloseParenthesis)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<StackedToken>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    while let Some(stacked) = operators.pop_front() {
        match stacked {
            StackedToken::OpenParenthesis => return Err(SyntaxError::UnbalancedParen),
            StackedToken::Operator(operator) => output.push(Token::Operator(operator)),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<StackedToken>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop_front() {
            None => return Err(SyntaxError::UnbalancedParen),
            Some(StackedToken::OpenParenthesis) => {
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(StackedToken::Operator(operator)) => output.push(Token::Operator(operator)),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<StackedToken>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(StackedToken::Operator(top_operator)) = operators.front() {
        let top_outranks = top_operator.precedence_gt(&operator)
            || (top_operator.precedence_eq(&operator)
                && operator.associativity() == Associativity::Left);
        if !top_outranks {
            break;
        }

        let top_operator = *top_operator;
        operators.pop_front();
        output.push(Token::Operator(top_operator));
    }

    operators.push_front(StackedToken::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 2 + 3
        let infix = [Token::Number(2.0), "+".parse().unwrap(), Token::Number(3.0)].to_vec();
        let postfix = [Token::Number(2.0), Token::Number(3.0), "+".parse().unwrap()].to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 2 - (3 + 4)
        let infix = [
            Token::Number(2.0),
            "-".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            "+".parse().unwrap(),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 2 + 3 * 4 - 5
        let infix = [
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
            "*".parse().unwrap(),
            Token::Number(4.0),
            "-".parse().unwrap(),
            Token::Number(5.0),
        ]
        .to_vec();
        let postfix = [
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
            Token::Number(5.0),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_associates_left() {
        // 8 - 3 - 2
        let infix = [
            Token::Number(8.0),
            "-".parse().unwrap(),
            Token::Number(3.0),
            "-".parse().unwrap(),
            Token::Number(2.0),
        ]
        .to_vec();
        let postfix = [
            Token::Number(8.0),
            Token::Number(3.0),
            "-".parse().unwrap(),
            Token::Number(2.0),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = [
            Token::Number(1.0),
            "+".parse().unwrap(),
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
            Token::CloseParenthesis,
            "*".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            Token::Number(1.0),
            Token::Number(2.0),
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (2 + 3))
        let infix = [
            Token::OpenParenthesis,
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap_err();

        assert_eq!(actual, SyntaxError::UnbalancedParen)
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (2 + 3
        let infix = [
            Token::OpenParenthesis,
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap_err();

        assert_eq!(actual, SyntaxError::UnbalancedParen)
    }

    #[test]
    fn infix_to_postfix_adjacent_operands_should_return_err() {
        // 2 3 +
        let infix = [Token::Number(2.0), Token::Number(3.0), "+".parse().unwrap()].to_vec();

        let actual = infix_to_postfix(infix).unwrap_err();

        assert_eq!(actual, SyntaxError::MissingOperator)
    }

    #[test]
    fn infix_to_postfix_adjacent_parenthesised_operands_should_return_err() {
        // (1)(2)
        let infix = [
            Token::OpenParenthesis,
            Token::Number(1.0),
            Token::CloseParenthesis,
            Token::OpenParenthesis,
            Token::Number(2.0),
            Token::CloseParenthesis,
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap_err();

        assert_eq!(actual, SyntaxError::MissingOperator)
    }
}
