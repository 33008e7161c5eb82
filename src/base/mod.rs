//! Foundation types for the lp-parse library.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`TextRange`], [`TextSize`] - source positions (byte offsets)
//! - [`Position`], [`SourceLocation`] - line/column positions for errors
//!
//! This module has NO dependencies on other lp_parse modules.

mod position;

pub use position::{Position, SourceLocation};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
