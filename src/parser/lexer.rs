//! Logos-based lexer for the LP format
//!
//! Fast tokenization using the logos crate. Keyword spellings are NOT
//! distinct token classes here: `min`, `bounds`, `free` and friends all lex
//! as [`TokenKind::Word`] and are classified by the parser, because LP
//! keywords are only keywords in the positions that expect them (see
//! `keywords`). The two exceptions are `inf`/`infinity`, which lex eagerly
//! as [`TokenKind::Infinity`] and are therefore reserved.
//!
//! Trivia never reaches the parser: whitespace and line comments are skip
//! patterns, block comments are consumed by a callback. A block comment
//! body may not contain a bare `*`; the first `*` must be the start of the
//! closing `*\`, otherwise the scan fails rather than silently extending
//! the comment.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::error::{LexError, LexErrorKind};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: TextRange,
}

impl Token<'_> {
    pub fn offset(&self) -> TextSize {
        self.span.start()
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let span = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );
        Some(match kind {
            Ok(kind) => Ok(Token { kind, text, span }),
            Err(kind) => Err(LexError { kind, span }),
        })
    }
}

/// Lazy token stream over `input`
pub fn tokenize(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Block comment: `\*` already matched, scan for `*\`.
fn lex_block_comment<'s>(
    lex: &mut logos::Lexer<'s, TokenKind>,
) -> Result<logos::Skip, LexErrorKind> {
    let rest = lex.remainder();
    match rest.find('*') {
        Some(i) if rest.as_bytes().get(i + 1) == Some(&b'\\') => {
            lex.bump(i + 2);
            Ok(logos::Skip)
        }
        Some(i) => {
            lex.bump(i + 1);
            Err(LexErrorKind::BlockCommentStrayStar)
        }
        None => {
            lex.bump(rest.len());
            Err(LexErrorKind::UnterminatedBlockComment)
        }
    }
}

/// Logos token enum for the LP lexical grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA (skipped or, for broken block comments, turned into errors;
    // these variants are never yielded)
    // =========================================================================
    /// `\` followed by anything but `*` or newline, through end of line.
    /// Priority beats `Word` for the two-character case like `\a<newline>`.
    #[regex(r"\\[^\n*][^\n]*", logos::skip, priority = 3)]
    LineComment,

    #[token(r"\*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Unsigned number; a sign in front is always its own token
    #[regex(r"([0-9]+\.?[0-9]*|[0-9]*\.[0-9]+)([eE][+-]?[0-9]+)?", priority = 4)]
    Number,

    /// `inf`/`infinity` with an optional embedded sign, any case
    #[regex(r"[+-]?[iI][nN][fF]([iI][nN][iI][tT][yY])?", priority = 4)]
    Infinity,

    /// Identifier-shaped span. First char is a letter, `_`, or one of
    /// `!#$%&(),.;?@\{}~'`; continuation chars additionally allow digits,
    /// `|` and `>`; internal `-` must be followed by a continuation char.
    /// Maximal munch makes `x1>` and `x-3y` single words.
    #[regex(
        r"[a-zA-Z_!#$%&(),.;?@\\{}~'][a-zA-Z0-9_!#$%&(),.;?@\\{}~'|>]*(-[a-zA-Z0-9_!#$%&(),.;?@\\{}~'|>]+)*",
        priority = 2
    )]
    Word,

    // =========================================================================
    // PUNCTUATION (longest match wins in logos)
    // =========================================================================
    #[token("::")]
    DoubleColon,

    #[token(":")]
    Colon,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("<=")]
    Le,

    #[token(">=")]
    Ge,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("=")]
    Eq,
}

impl TokenKind {
    /// Stable human name for diagnostics and tests.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::LineComment | TokenKind::BlockComment => "comment",
            TokenKind::Number => "number",
            TokenKind::Infinity => "infinity",
            TokenKind::Word => "identifier",
            TokenKind::DoubleColon => "`::`",
            TokenKind::Colon => "`:`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Le => "`<=`",
            TokenKind::Ge => "`>=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Eq => "`=`",
        }
    }
}
