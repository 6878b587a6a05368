use std::iter::Peekable;

use crate::{
    ast::{Block, Declaration, Param, ProcDecl, Program, TypeName, TypeSpec, VarDecl},
    interpreter::{
        lexer::{Spanned, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_compound,
            utils::{expect, parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses a program header and its body, up to and including the final `.`.
///
/// Grammar: `program := "program" ID ";" block "."`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Spanned>
{
    let line = expect(tokens, TokenKind::Program)?.line;
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Semi)?;
    let block = parse_block(tokens)?;
    expect(tokens, TokenKind::Dot)?;

    Ok(Program { name, block, line })
}

/// Parses a block: its declarations, then its compound statement.
///
/// Grammar: `block := declarations compound`
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Spanned>
{
    let declarations = parse_declarations(tokens)?;
    let compound = parse_compound(tokens)?;

    Ok(Block { declarations,
               compound })
}

/// Parses the declaration section of a block.
///
/// The `var` section, if present, must hold at least one declaration.
/// Procedure declarations follow it.
///
/// Grammar: `declarations := ("var" (var_decl ";")+)? proc_decl*`
fn parse_declarations<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Declaration>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut declarations = Vec::new();

    if peek_kind(tokens) == TokenKind::Var {
        tokens.next();
        loop {
            declarations.extend(parse_variable_declaration(tokens)?.into_iter()
                                                                   .map(Declaration::Variable));
            expect(tokens, TokenKind::Semi)?;
            if peek_kind(tokens) != TokenKind::Identifier {
                break;
            }
        }
    }

    while peek_kind(tokens) == TokenKind::Procedure {
        declarations.push(Declaration::Procedure(parse_procedure_declaration(tokens)?));
    }

    Ok(declarations)
}

/// Parses `a, b, c : type` into one declaration per name.
///
/// Grammar: `var_decl := ID ("," ID)* ":" type_spec`
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<VarDecl>>
    where I: Iterator<Item = &'a Spanned>
{
    let names = parse_identifier_list(tokens)?;
    expect(tokens, TokenKind::Colon)?;
    let type_spec = parse_type_spec(tokens)?;

    Ok(names.into_iter()
            .map(|(name, line)| VarDecl { name,
                                          type_spec,
                                          line })
            .collect())
}

/// Parses a procedure declaration.
///
/// Grammar:
/// ```text
///     proc_decl := "procedure" ID ("(" formal_parameter_list ")")? ";" block ";"
/// ```
fn parse_procedure_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ProcDecl>
    where I: Iterator<Item = &'a Spanned>
{
    let line = expect(tokens, TokenKind::Procedure)?.line;
    let (name, _) = parse_identifier(tokens)?;

    let params = if peek_kind(tokens) == TokenKind::LParen {
        tokens.next();
        let params = parse_formal_parameter_list(tokens)?;
        expect(tokens, TokenKind::RParen)?;
        params
    } else {
        Vec::new()
    };

    expect(tokens, TokenKind::Semi)?;
    let block = parse_block(tokens)?;
    expect(tokens, TokenKind::Semi)?;

    Ok(ProcDecl { name,
                  params,
                  block,
                  line })
}

/// Parses the parameter groups between a procedure's parentheses.
///
/// Grammar:
/// ```text
///     formal_parameter_list := formal_parameters (";" formal_parameters)*
///     formal_parameters     := ID ("," ID)* ":" type_spec
/// ```
fn parse_formal_parameter_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Param>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut params = Vec::new();
    loop {
        let names = parse_identifier_list(tokens)?;
        expect(tokens, TokenKind::Colon)?;
        let type_spec = parse_type_spec(tokens)?;
        params.extend(names.into_iter().map(|(name, line)| Param { name,
                                                                    type_spec,
                                                                    line }));

        if peek_kind(tokens) != TokenKind::Semi {
            break;
        }
        tokens.next();
    }
    Ok(params)
}

/// Parses `ID ("," ID)*`.
fn parse_identifier_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<(String, usize)>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut names = vec![parse_identifier(tokens)?];
    while peek_kind(tokens) == TokenKind::Comma {
        tokens.next();
        names.push(parse_identifier(tokens)?);
    }
    Ok(names)
}

/// Parses a type name.
///
/// Grammar: `type_spec := "integer" | "real"`
fn parse_type_spec<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeSpec>
    where I: Iterator<Item = &'a Spanned>
{
    let name = match peek_kind(tokens) {
        TokenKind::Integer => TypeName::Integer,
        TokenKind::Real => TypeName::Real,
        _ => return Err(unexpected(tokens, "a type ('integer' or 'real')")),
    };
    let line = tokens.next().map_or(0, |spanned| spanned.line);

    Ok(TypeSpec { name, line })
}
