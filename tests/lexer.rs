use pascalina::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, tokenize},
};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|t| t.token).collect()
}

#[test]
fn keywords_and_identifiers_ignore_case() {
    assert_eq!(tokens_of("BEGIN Begin begin nUmbeR"),
               vec![Token::Begin,
                    Token::Begin,
                    Token::Begin,
                    Token::Identifier("number".to_string()),
                    Token::Eof]);
    assert_eq!(tokens_of("PROGRAM VAR INTEGER REAL DIV PROCEDURE END"),
               vec![Token::Program,
                    Token::Var,
                    Token::Integer,
                    Token::Real,
                    Token::Div,
                    Token::Procedure,
                    Token::End,
                    Token::Eof]);
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(tokens_of("beginning _end div2"),
               vec![Token::Identifier("beginning".to_string()),
                    Token::Identifier("_end".to_string()),
                    Token::Identifier("div2".to_string()),
                    Token::Eof]);
}

#[test]
fn assign_is_distinct_from_colon() {
    assert_eq!(tokens_of("a : integer; a := 1"),
               vec![Token::Identifier("a".to_string()),
                    Token::Colon,
                    Token::Integer,
                    Token::Semi,
                    Token::Identifier("a".to_string()),
                    Token::Assign,
                    Token::IntegerConst(1),
                    Token::Eof]);
}

#[test]
fn numbers_split_into_integer_and_real() {
    assert_eq!(tokens_of("3 3.14 0.5"),
               vec![Token::IntegerConst(3),
                    Token::RealConst(3.14),
                    Token::RealConst(0.5),
                    Token::Eof]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(tokens_of("{ one }x{two\nlines}\t:=\r\n{}1"),
               vec![Token::Identifier("x".to_string()),
                    Token::Assign,
                    Token::IntegerConst(1),
                    Token::Eof]);
}

#[test]
fn empty_input_is_a_single_eof() {
    assert_eq!(tokens_of(""), vec![Token::Eof]);
    assert_eq!(tokens_of("  { nothing here }\n"), vec![Token::Eof]);
}

#[test]
fn eof_repeats_after_input_is_exhausted() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("x".to_string()));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    }
}

#[test]
fn iteration_stops_after_eof() {
    let tokens: Vec<_> = Lexer::new("a b").collect();
    assert_eq!(tokens.len(), 3);
}

#[test]
fn tokens_carry_lines_and_columns() {
    let tokens = tokenize("program p;\n  var x : real;\n{ multi\nline } begin").unwrap();

    let var = &tokens[3];
    assert_eq!(var.token, Token::Var);
    assert_eq!((var.line, var.column), (2, 3));

    let begin = &tokens[8];
    assert_eq!(begin.token, Token::Begin);
    assert_eq!((begin.line, begin.column), (4, 8));
}

#[test]
fn spans_rebuild_the_source() {
    let src = "program p; { header }\nvar a: integer;\n{ two\n  lines }\nbegin\n  a := 2 * (3 + 4) {inline}\nend.";
    let rebuilt: String = tokenize(src).unwrap()
                                       .iter()
                                       .filter(|t| t.token != Token::Eof)
                                       .map(|t| &src[t.span.clone()])
                                       .collect();

    assert_eq!(rebuilt, "programp;vara:integer;begina:=2*(3+4)end.");
}

#[test]
fn unexpected_character_reports_position() {
    let err = tokenize("a := 1;\n  b := 2 ? 3").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '?',
                                               line:      2,
                                               column:    10, });
    assert_eq!(err.to_string(), "Error on line 2, column 10: Unexpected character '?'.");
}

#[test]
fn unterminated_comment_is_an_error() {
    let err = tokenize("begin\n  { never closed").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedComment { .. }), "got {err:?}");
    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 3);
}

#[test]
fn oversized_integer_is_an_error() {
    let err = tokenize("x := 123456789012345678901234567890").unwrap_err();
    assert!(matches!(err, LexError::IntegerOutOfRange { .. }), "got {err:?}");
    assert_eq!(err.column(), 6);
}
