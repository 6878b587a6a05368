use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_variable, unexpected},
        },
    },
};

/// Parses a factor: the atoms of the expression grammar and prefix signs.
///
/// Prefix operators recurse into `factor`, so they nest without limit and
/// are right-associative: `- - 3` is `-(-(3))`.
///
/// Grammar:
/// ```text
///     factor := INT_CONST | REAL_CONST
///             | "(" expr ")"
///             | ("+" | "-") factor
///             | variable
/// ```
///
/// # Errors
/// Returns a `ParseError` when no factor starts at the next token, or when a
/// parenthesized expression is not closed.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let Some(&spanned) = tokens.peek() else {
        return Err(unexpected(tokens, "an expression"));
    };
    let line = spanned.line;

    match &spanned.token {
        Token::Plus | Token::Minus => {
            let op = if spanned.token == Token::Plus {
                UnaryOperator::Plus
            } else {
                UnaryOperator::Negate
            };
            tokens.next();
            let expr = parse_factor(tokens)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               line })
        },
        Token::IntegerConst(value) => {
            let value = (*value).into();
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::RealConst(value) => {
            let value = (*value).into();
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(expr)
        },
        Token::Identifier(_) => Ok(Expr::Variable(parse_variable(tokens)?)),
        _ => Err(unexpected(tokens, "an expression")),
    }
}
