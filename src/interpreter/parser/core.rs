use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, TokenKind},
        parser::{binary::parse_additive, program::parse_program, utils::peek_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from its tokens.
///
/// After the closing `.` only end of input may follow.
///
/// # Errors
/// Returns the first `ParseError` met; no partial tree is returned.
///
/// # Example
/// ```
/// use pascalina::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("program demo; begin end.").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.name, "demo");
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;
    expect_end(&mut iter)?;
    trace!("parsed program '{}' with {} declarations",
           program.name,
           program.block.declarations.len());
    Ok(program)
}

/// Parses a bare arithmetic expression, as a calculator would accept it.
///
/// # Errors
/// Returns a `ParseError` if the tokens are not exactly one expression.
pub fn parse_bare_expression(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;
    expect_end(&mut iter)?;
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expr := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens)
}

/// Requires that nothing but end of input is left.
fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    if peek_kind(tokens) == TokenKind::Eof {
        return Ok(());
    }
    match tokens.peek() {
        Some(spanned) => {
            Err(ParseError::UnexpectedTrailingTokens { found:  spanned.token.describe(),
                                                       line:   spanned.line,
                                                       column: spanned.column, })
        },
        None => Ok(()),
    }
}
