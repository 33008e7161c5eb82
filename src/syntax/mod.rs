//! Typed AST for LP models and canonical text emission.
//!
//! - [`Model`] and the node types it contains - everything a parsed file
//!   records, in source order
//! - `Display` impls (see `writer`) - canonical LP re-emission
//!
//! Depends only on `base`.

pub mod model;
mod writer;

pub use model::{
    Bound, Coefficient, ComparisonOperator, Constraint, ConstraintLabel, LinearExpression,
    Magnitude, Model, NameMarker, NumericValue, Objective, Sense, Sign, SignedTerm, SosConstraint,
    SosEntry, SosType, VariableClass,
};
