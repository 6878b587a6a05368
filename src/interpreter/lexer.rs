use std::ops::Range;

use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
///
/// Keywords are matched case-insensitively and identifiers are stored
/// lower-cased, so `BEGIN`, `Begin` and `begin` are the same token and
/// `nUmbeR` names the same variable as `number`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras, error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    RealConst(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    IntegerConst(i64),
    /// `program`
    #[token("program", ignore(ascii_case))]
    Program,
    /// `var`
    #[token("var", ignore(ascii_case))]
    Var,
    /// `integer`
    #[token("integer", ignore(ascii_case))]
    Integer,
    /// `real`
    #[token("real", ignore(ascii_case))]
    Real,
    /// `div`
    #[token("div", ignore(ascii_case))]
    Div,
    /// `procedure`
    #[token("procedure", ignore(ascii_case))]
    Procedure,
    /// `begin`
    #[token("begin", ignore(ascii_case))]
    Begin,
    /// `end`
    #[token("end", ignore(ascii_case))]
    End,
    /// Identifier tokens, lower-cased.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_ascii_lowercase())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semi,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{ comments }`, which do not nest.
    #[regex(r"\{[^}]*\}", |lex| {
        let comment = lex.slice();
        if let Some(offset) = comment.rfind('\n') {
            lex.extras.line += comment.matches('\n').count();
            lex.extras.line_start = lex.span().start + offset + 1;
        }
        logos::Skip
    })]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// End of input. Never matched from text; the [`Lexer`] produces it once
    /// the source is exhausted.
    Eof,
}

impl Token {
    /// Returns the kind of this token, without its literal value.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::RealConst(_) => TokenKind::RealConst,
            Self::IntegerConst(_) => TokenKind::IntegerConst,
            Self::Program => TokenKind::Program,
            Self::Var => TokenKind::Var,
            Self::Integer => TokenKind::Integer,
            Self::Real => TokenKind::Real,
            Self::Div => TokenKind::Div,
            Self::Procedure => TokenKind::Procedure,
            Self::Begin => TokenKind::Begin,
            Self::End => TokenKind::End,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Assign => TokenKind::Assign,
            Self::Colon => TokenKind::Colon,
            Self::Comma => TokenKind::Comma,
            Self::Semi => TokenKind::Semi,
            Self::Dot => TokenKind::Dot,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Comment | Self::NewLine => TokenKind::Trivia,
            Self::Eof => TokenKind::Eof,
        }
    }

    /// Returns a human-readable description of the token for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::IntegerConst(value) => format!("integer constant {value}"),
            Self::RealConst(value) => format!("real constant {value}"),
            other => other.kind().to_string(),
        }
    }
}

/// The kind of a [`Token`], with literal values stripped.
///
/// The parser compares kinds when it consumes a token and names them in its
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    RealConst,
    IntegerConst,
    Program,
    Var,
    Integer,
    Real,
    Div,
    Procedure,
    Begin,
    End,
    Identifier,
    Assign,
    Colon,
    Comma,
    Semi,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Trivia,
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RealConst => "real constant",
            Self::IntegerConst => "integer constant",
            Self::Program => "'program'",
            Self::Var => "'var'",
            Self::Integer => "'integer'",
            Self::Real => "'real'",
            Self::Div => "'div'",
            Self::Procedure => "'procedure'",
            Self::Begin => "'begin'",
            Self::End => "'end'",
            Self::Identifier => "identifier",
            Self::Assign => "':='",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Semi => "';'",
            Self::Dot => "'.'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Trivia => "whitespace",
            Self::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so tokens and errors can be
/// given a line and column.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset where the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// Byte range of the token in the source. Empty for [`Token::Eof`].
    pub span:   Range<usize>,
    /// 1-based line where the token starts.
    pub line:   usize,
    /// 1-based column where the token starts.
    pub column: usize,
}

/// Produces tokens from source text on demand.
///
/// [`Lexer::next_token`] keeps returning [`Token::Eof`] once the text is
/// exhausted. Iterating yields that `Eof` exactly once and then stops, and
/// also stops after the first error.
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Token::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// Returns the next token, or [`Token::Eof`] when the input is used up.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters that start no token,
    /// unterminated comments and numeric literals that cannot be
    /// represented.
    pub fn next_token(&mut self) -> Result<Spanned, LexError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(self.spanned(token, self.inner.span())),
            Some(Err(kind)) => {
                let span = self.inner.span();
                let (line, column) = self.line_column(span.start);
                Err(LexError::new(kind, self.inner.slice(), line, column))
            },
            None => {
                let end = self.inner.source().len();
                Ok(self.spanned(Token::Eof, end..end))
            },
        }
    }

    fn spanned(&self, token: Token, span: Range<usize>) -> Spanned {
        let (line, column) = self.line_column(span.start);
        Spanned { token,
                  span,
                  line,
                  column }
    }

    /// Line and column of a byte offset on the current line.
    fn line_column(&self, offset: usize) -> (usize, usize) {
        let extras = &self.inner.extras;
        let source = self.inner.source();
        let start = extras.line_start.min(offset);
        (extras.line, source[start..offset].chars().count() + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.next_token();
        if matches!(next, Err(_) | Ok(Spanned { token: Token::Eof, .. })) {
            self.finished = true;
        }
        Some(next)
    }
}

/// Tokenizes a whole source text.
///
/// The returned sequence always ends with a single [`Token::Eof`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use pascalina::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x := 2 div 1 { two }").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|t| t.token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Assign,
///                 Token::IntegerConst(2),
///                 Token::Div,
///                 Token::IntegerConst(1),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    Lexer::new(source).collect()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerOutOfRange)
}

/// Parses a real literal from the current token slice. Literals too long to
/// be finite are rejected.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LexErrorKind::MalformedReal),
    }
}
