use std::iter::Peekable;

use crate::{
    ast::{Compound, Statement},
    interpreter::{
        lexer::{Spanned, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_variable, peek_kind},
        },
    },
};

/// Parses a compound statement.
///
/// Grammar: `compound := "begin" statement_list "end"`
pub fn parse_compound<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Compound>
    where I: Iterator<Item = &'a Spanned>
{
    expect(tokens, TokenKind::Begin)?;
    let children = parse_statement_list(tokens)?;
    expect(tokens, TokenKind::End)?;

    Ok(Compound { children })
}

/// Parses statements separated by `;`.
///
/// A trailing `;` before `end` yields a final empty statement.
///
/// Grammar: `statement_list := statement (";" statement)*`
fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut statements = vec![parse_statement(tokens)?];
    while peek_kind(tokens) == TokenKind::Semi {
        tokens.next();
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a nested compound statement, starting with `begin`.
/// - an assignment, starting with an identifier.
/// - the empty statement, for anything else. The caller then decides whether
///   the token that follows is acceptable.
///
/// Grammar: `statement := compound | assignment | empty`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    match peek_kind(tokens) {
        TokenKind::Begin => Ok(Statement::Compound(parse_compound(tokens)?)),
        TokenKind::Identifier => parse_assignment(tokens),
        _ => Ok(Statement::NoOp),
    }
}

/// Parses an assignment.
///
/// Grammar: `assignment := variable ":=" expr`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let target = parse_variable(tokens)?;
    let line = expect(tokens, TokenKind::Assign)?.line;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assign { target,
                           value,
                           line })
}
