use std::iter::Peekable;

use crate::{
    ast::VariableRef,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// A drained stream reads as [`TokenKind::Eof`], so callers see end of
/// input forever once the tokens run out.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Spanned>
{
    tokens.peek().map_or(TokenKind::Eof, |spanned| spanned.token.kind())
}

/// Consumes the next token if it has the expected kind.
///
/// This is the only way the grammar commits to a terminal. There is no
/// recovery: a mismatch is reported as expected vs. found and ends the
/// parse.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the next token is of another
/// kind.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Spanned>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next_if(|spanned| spanned.token.kind() == kind) {
        Some(spanned) => Ok(spanned),
        None => Err(unexpected(tokens, &kind.to_string())),
    }
}

/// Builds an `UnexpectedToken` error for the next token in the stream.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseError
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.peek() {
        Some(spanned) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                       found:    spanned.token.describe(),
                                                       line:     spanned.line,
                                                       column:   spanned.column, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    TokenKind::Eof.to_string(),
                                              line:     0,
                                              column:   0, },
    }
}

/// Parses a plain identifier and returns its name with its line.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next_if(|spanned| spanned.token.kind() == TokenKind::Identifier) {
        Some(Spanned { token: Token::Identifier(name),
                       line,
                       .. }) => Ok((name.clone(), *line)),
        _ => Err(unexpected(tokens, &TokenKind::Identifier.to_string())),
    }
}

/// Parses a variable reference.
///
/// Grammar: `variable := ID`
pub(in crate::interpreter::parser) fn parse_variable<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<VariableRef>
    where I: Iterator<Item = &'a Spanned>
{
    let (name, line) = parse_identifier(tokens)?;
    Ok(VariableRef { name, line })
}
