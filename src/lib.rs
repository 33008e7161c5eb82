//! # lp-parse
//!
//! Parser and writer for the LP model-description format. Objectives,
//! constraints, bounds, variable classes and SOS sections become a typed
//! [`Model`](syntax::Model), and every model prints back as canonical LP
//! text via [`Display`](std::fmt::Display).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, keyword classification, recursive-descent parser
//!   ↓
//! syntax    → Model types, canonical text emission
//!   ↓
//! base      → Primitives (Position, SourceLocation, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser)
// ============================================================================

/// Foundation types: Position, SourceLocation, TextRange
pub mod base;

/// Parser: Logos lexer, keyword classification, recursive descent
pub mod parser;

/// Syntax: typed model and canonical text emission
pub mod syntax;

// Re-export the parsing entry points
pub use parser::{ParseError, ParseResult, parse, tokenize};

// Re-export foundation types
pub use base::{Position, SourceLocation, TextRange, TextSize};

// Re-export the model types
pub use syntax::{
    Bound, Coefficient, ComparisonOperator, Constraint, LinearExpression, Model, NumericValue,
    Objective, Sense, Sign, SignedTerm, SosConstraint, SosType, VariableClass,
};
