use crate::calculator::error::EvalError;
use crate::calculator::operator::BinaryOperator;
use crate::calculator::token::Token;

/// Reduces the given postfix token sequence to a single numeric value.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use expression_calculator::calculator::evaluator::evaluate;
/// use expression_calculator::calculator::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number(2.0),
///     Token::Number(3.0),
///     "+".parse().unwrap(),
/// ];
/// let result = evaluate(postfix_tokens)?;
/// assert_eq!(result, 5.0);
/// # Ok::<(), expression_calculator::calculator::error::EvalError>(())
/// ```
pub fn evaluate(postfix_tokens: Vec<Token>) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Operator(operator) => {
                let second_operand = operands.pop().ok_or(EvalError::InsufficientOperands)?;
                let first_operand = operands.pop().ok_or(EvalError::InsufficientOperands)?;

                if operator == BinaryOperator::Divide && second_operand == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }

                operands.push(operator.evaluate(first_operand, second_operand));
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvalError::MalformedExpression);
            }
        }
    }

    let result = operands.pop().ok_or(EvalError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(EvalError::MalformedExpression);
    }
    Ok(result)
}
