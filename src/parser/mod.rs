//! Parser for the LP model-description format
//!
//! This module provides a fault-reporting parser built from:
//! - **logos** for fast lexing
//! - a hand-written recursive descent pass for the grammar
//!
//! Keywords are not reserved in LP input, so the lexer yields them as
//! plain words and the parser classifies each word against the spellings
//! expected at its decision point.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind, lazily
//!     ↓
//! Parser → typed Model (objectives, constraints, sections)
//! ```
//!
//! The token stream is pulled on demand, so a lex error after a parse
//! error is never reported first: the first problem in text order wins,
//! and parsing stops there.

#[allow(clippy::module_inception)]
mod parser;

mod error;
mod keywords;
mod lexer;

pub use error::{Expectation, LexError, LexErrorKind, ParseError, ParseResult, StructuralIssue};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::parse;
