use crate::calculator::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(BinaryOperator::Add)),
            "-" => Ok(Token::Operator(BinaryOperator::Subtract)),
            "*" => Ok(Token::Operator(BinaryOperator::Multiply)),
            "/" => Ok(Token::Operator(BinaryOperator::Divide)),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => input.parse::<f64>().map(Token::Number).map_err(|_| ()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
