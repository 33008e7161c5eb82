//! Parse error taxonomy.
//!
//! One typed enum, four failure classes: lexical, unexpected token,
//! structural, incomplete input. Every variant carries a
//! [`SourceLocation`] (byte offset plus line/column). The first error is
//! fatal; the parser never recovers or collects.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::base::SourceLocation;

use super::lexer::Token;

/// Result alias used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

// ============================================================================
// Lexical errors
// ============================================================================

/// What the scanner choked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexErrorKind {
    /// No token class matches at the cursor.
    #[default]
    InvalidCharacter,
    /// `\*` with no closing `*\` before end of input.
    UnterminatedBlockComment,
    /// A `*` in a block comment body not immediately followed by `\`.
    /// The comment is not silently extended to a later `*\`.
    BlockCommentStrayStar,
}

impl LexErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            LexErrorKind::InvalidCharacter => "unrecognized character",
            LexErrorKind::UnterminatedBlockComment => "unterminated block comment",
            LexErrorKind::BlockCommentStrayStar => {
                "block comment body may not contain a bare `*`"
            }
        }
    }
}

/// A lexical failure with its span, as yielded by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: TextRange,
}

// ============================================================================
// Expected sets
// ============================================================================

/// One element of an expected set, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    SenseKeyword,
    SubjectTo,
    SectionKeyword,
    EndKeyword,
    FreeKeyword,
    SosType,
    Identifier,
    NumericValue,
    Term,
    ComparisonOperator,
    TermOperator,
    Colon,
    DoubleColon,
    EndOfInput,
}

impl Expectation {
    pub fn description(self) -> &'static str {
        match self {
            Expectation::SenseKeyword => "an objective sense (`Minimize` or `Maximize`)",
            Expectation::SubjectTo => "the constraints header (`Subject To`)",
            Expectation::SectionKeyword => "a section keyword",
            Expectation::EndKeyword => "`End`",
            Expectation::FreeKeyword => "`free`",
            Expectation::SosType => "an SOS type (`s1` or `s2`)",
            Expectation::Identifier => "an identifier",
            Expectation::NumericValue => "a numeric value",
            Expectation::Term => "a term",
            Expectation::ComparisonOperator => "a comparison operator",
            Expectation::TermOperator => "`+` or `-`",
            Expectation::Colon => "`:`",
            Expectation::DoubleColon => "`::`",
            Expectation::EndOfInput => "end of input",
        }
    }
}

fn describe_expected(expected: &[Expectation]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.description().to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|e| e.description())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head} or {}", last.description())
        }
    }
}

fn describe_lex(kind: &LexErrorKind, found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{} `{}`", kind.description(), c.escape_default()),
        None => kind.description().to_string(),
    }
}

// ============================================================================
// Structural errors
// ============================================================================

/// Rules the token grammar alone cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralIssue {
    /// A linear expression with zero terms (empty sum).
    EmptyExpression,
    /// An unnamed objective after the first objective.
    MultipleUnnamedObjectives,
    /// An SOS entry with no preceding header in its section.
    SosEntryBeforeHeader,
}

impl StructuralIssue {
    pub fn description(self) -> &'static str {
        match self {
            StructuralIssue::EmptyExpression => "empty linear expression",
            StructuralIssue::MultipleUnnamedObjectives => {
                "only the leading objective may be unnamed"
            }
            StructuralIssue::SosEntryBeforeHeader => "SOS entry before any header",
        }
    }
}

// ============================================================================
// ParseError
// ============================================================================

/// The error type returned by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The scanner found no valid token.
    #[error("{location}: {}", describe_lex(.kind, .found))]
    Lex {
        kind: LexErrorKind,
        /// First character of the offending span, if any.
        found: Option<char>,
        location: SourceLocation,
    },

    /// The token stream does not fit the grammar.
    #[error("{location}: expected {}, found `{found}`", describe_expected(.expected))]
    UnexpectedToken {
        expected: &'static [Expectation],
        found: SmolStr,
        location: SourceLocation,
    },

    /// Tokens were fine, a structural rule was not.
    #[error("{location}: {}", .issue.description())]
    Structural {
        issue: StructuralIssue,
        location: SourceLocation,
    },

    /// End of input while a production still required tokens.
    #[error("{location}: unexpected end of input, expected {}", describe_expected(.expected))]
    IncompleteInput {
        expected: &'static [Expectation],
        location: SourceLocation,
    },
}

impl ParseError {
    pub(crate) fn lex(input: &str, error: LexError) -> Self {
        let start = usize::from(error.span.start());
        let end = usize::from(error.span.end());
        let found = input.get(start..end).and_then(|s| s.chars().next());
        Self::Lex {
            kind: error.kind,
            found,
            location: SourceLocation::of(input, error.span.start()),
        }
    }

    pub(crate) fn unexpected(
        input: &str,
        expected: &'static [Expectation],
        token: &Token<'_>,
    ) -> Self {
        Self::UnexpectedToken {
            expected,
            found: SmolStr::new(token.text),
            location: SourceLocation::of(input, token.span.start()),
        }
    }

    pub(crate) fn structural(input: &str, issue: StructuralIssue, offset: TextSize) -> Self {
        Self::Structural {
            issue,
            location: SourceLocation::of(input, offset),
        }
    }

    pub(crate) fn incomplete(input: &str, expected: &'static [Expectation]) -> Self {
        Self::IncompleteInput {
            expected,
            location: SourceLocation::of(input, TextSize::of(input)),
        }
    }

    /// Where the failure was detected.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::Structural { location, .. }
            | ParseError::IncompleteInput { location, .. } => *location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_message_names_character_and_position() {
        let input = "min x\n^";
        let error = ParseError::lex(
            input,
            LexError {
                kind: LexErrorKind::InvalidCharacter,
                span: TextRange::new(TextSize::new(6), TextSize::new(7)),
            },
        );
        assert_eq!(error.to_string(), "2:1: unrecognized character `^`");
    }

    #[test]
    fn expected_set_joins_with_or() {
        assert_eq!(
            describe_expected(&[Expectation::SectionKeyword, Expectation::EndKeyword]),
            "a section keyword or `End`"
        );
        assert_eq!(describe_expected(&[Expectation::Colon]), "`:`");
    }

    #[test]
    fn incomplete_points_past_the_last_character() {
        let error = ParseError::incomplete("max x", &[Expectation::SubjectTo]);
        let location = error.location();
        assert_eq!(usize::from(location.offset), 5);
        assert_eq!(
            error.to_string(),
            "1:6: unexpected end of input, expected the constraints header (`Subject To`)"
        );
    }
}
