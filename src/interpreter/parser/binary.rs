use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(&spanned) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&spanned.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = spanned.line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `div` and `/`, so `10 * a div 4`
/// is `(10 * a) div 4`.
///
/// The rule is: `term := factor (("*" | "div" | "/") factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(&spanned) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&spanned.token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::IntegerDiv | BinaryOperator::FloatDiv)
        {
            let line = spanned.line;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Div => Some(BinaryOperator::IntegerDiv),
        Token::Slash => Some(BinaryOperator::FloatDiv),
        _ => None,
    }
}
