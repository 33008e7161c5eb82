//! Typed model for parsed LP files.
//!
//! Everything the parser reads ends up here, in the order it was read and
//! in the shape it was written. Nothing is normalized beyond what the
//! grammar itself requires: operators keep their direction, bounds keep
//! their token shape, the `:`/`::` constraint marker survives.
//!
//! ```text
//! Model
//! ├── sense: Sense
//! ├── objectives: Vec<Objective>
//! ├── constraints: Vec<Constraint>
//! ├── variable_classes: IndexMap<VariableClass, IndexSet<SmolStr>>  (insertion order)
//! ├── bounds: Vec<Bound>
//! ├── sos_constraints: Vec<SosConstraint>
//! └── has_end_marker: bool
//! ```

use std::ops::Mul;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

// ============================================================================
// Sense and signs
// ============================================================================

/// Objective sense of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn is_minimize(self) -> bool {
        self == Sense::Minimize
    }

    pub fn is_maximize(self) -> bool {
        self == Sense::Maximize
    }
}

/// Algebraic sign, +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Mul for Sign {
    type Output = Sign;

    /// Sign reconciliation: the product of an outer sign token and a sign
    /// embedded in a numeric lexeme, so `- -inf` multiplies out positive.
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

// ============================================================================
// Numeric values
// ============================================================================

/// Magnitude of a numeric value: a finite float or the infinity marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Magnitude {
    Finite(f64),
    Infinite,
}

/// A signed numeric literal: constraint right-hand sides, bound endpoints,
/// SOS entry weights.
///
/// The sign is already reconciled. A numeric position accepts an optional
/// outer sign token, and an infinity lexeme can embed its own sign; the two
/// multiply out once, at construction, so downstream consumers never
/// re-derive them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericValue {
    pub sign: Sign,
    pub magnitude: Magnitude,
}

impl NumericValue {
    pub fn new(sign: Sign, magnitude: Magnitude) -> Self {
        Self { sign, magnitude }
    }

    /// Build from an outer sign token and the sign embedded in the lexeme.
    pub fn reconciled(outer: Sign, inner: Sign, magnitude: Magnitude) -> Self {
        Self::new(outer * inner, magnitude)
    }

    /// A finite value; a negative input splits into sign and magnitude.
    pub fn finite(value: f64) -> Self {
        if value.is_sign_negative() {
            Self::new(Sign::Negative, Magnitude::Finite(-value))
        } else {
            Self::new(Sign::Positive, Magnitude::Finite(value))
        }
    }

    pub fn infinite(sign: Sign) -> Self {
        Self::new(sign, Magnitude::Infinite)
    }

    /// Fold to an `f64`, infinities included.
    pub fn value(self) -> f64 {
        let magnitude = match self.magnitude {
            Magnitude::Finite(v) => v,
            Magnitude::Infinite => f64::INFINITY,
        };
        self.sign.factor() * magnitude
    }

    pub fn is_infinite(self) -> bool {
        matches!(self.magnitude, Magnitude::Infinite)
    }

    pub fn is_negative(self) -> bool {
        self.sign.is_negative()
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Coefficient of a term: a finite number or a signed infinity.
///
/// A bare identifier term has coefficient `1.0`. An infinite coefficient
/// keeps the sign embedded in its lexeme; the term's operator sign lives on
/// [`SignedTerm`] and the two are stored as read, not reconciled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coefficient {
    Finite(f64),
    Infinity(Sign),
}

impl Coefficient {
    /// Fold to an `f64`, infinities included.
    pub fn value(self) -> f64 {
        match self {
            Coefficient::Finite(v) => v,
            Coefficient::Infinity(sign) => sign.factor() * f64::INFINITY,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Coefficient::Infinity(_))
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::Finite(1.0)
    }
}

/// One term of a linear expression: `sign * coefficient * variable`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedTerm {
    /// Sign of the `+`/`-` operator in front of the term; positive for an
    /// unsigned first term.
    pub sign: Sign,
    pub coefficient: Coefficient,
    pub variable: SmolStr,
}

impl SignedTerm {
    pub fn new(sign: Sign, coefficient: Coefficient, variable: impl Into<SmolStr>) -> Self {
        Self {
            sign,
            coefficient,
            variable: variable.into(),
        }
    }

    /// Operator sign folded into the coefficient.
    pub fn signed_coefficient(&self) -> f64 {
        self.sign.factor() * self.coefficient.value()
    }
}

/// An ordered sum of signed terms. Never empty in a well-formed model.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearExpression {
    terms: Vec<SignedTerm>,
}

impl LinearExpression {
    pub fn new(terms: Vec<SignedTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[SignedTerm] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignedTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl From<Vec<SignedTerm>> for LinearExpression {
    fn from(terms: Vec<SignedTerm>) -> Self {
        Self::new(terms)
    }
}

impl<'a> IntoIterator for &'a LinearExpression {
    type Item = &'a SignedTerm;
    type IntoIter = std::slice::Iter<'a, SignedTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

// ============================================================================
// Objectives
// ============================================================================

/// One objective. The leading objective may be unnamed; every further
/// objective carries a name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub name: Option<SmolStr>,
    pub expression: LinearExpression,
}

impl Objective {
    pub fn named(name: impl Into<SmolStr>, expression: LinearExpression) -> Self {
        Self {
            name: Some(name.into()),
            expression,
        }
    }

    pub fn unnamed(expression: LinearExpression) -> Self {
        Self {
            name: None,
            expression,
        }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

// ============================================================================
// Comparison operators
// ============================================================================

/// The five comparison operators of the format.
///
/// Consumers usually treat `<`/`<=` and `>`/`>=` as synonyms; the direction
/// helpers encode that reading while the variants keep exact identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOperator {
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Eq,
}

impl ComparisonOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Eq => "=",
        }
    }

    pub fn is_less(self) -> bool {
        matches!(self, ComparisonOperator::Le | ComparisonOperator::Lt)
    }

    pub fn is_greater(self) -> bool {
        matches!(self, ComparisonOperator::Ge | ComparisonOperator::Gt)
    }

    pub fn is_equality(self) -> bool {
        self == ComparisonOperator::Eq
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// How a constraint name was introduced: `:` or `::`.
///
/// The `::` form is the lazy-constraint convention some solvers accept.
/// The parser preserves which marker was written and attaches no meaning
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameMarker {
    Colon,
    DoubleColon,
}

/// A constraint label: the name before the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintLabel {
    pub name: SmolStr,
    pub marker: NameMarker,
}

impl ConstraintLabel {
    pub fn new(name: impl Into<SmolStr>, marker: NameMarker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

/// One constraint: `lhs op rhs`, optionally labeled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub label: Option<ConstraintLabel>,
    pub lhs: LinearExpression,
    pub operator: ComparisonOperator,
    pub rhs: NumericValue,
}

impl Constraint {
    pub fn name(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.name.as_str())
    }

    /// Was the label written with the `::` marker.
    pub fn is_lazy(&self) -> bool {
        matches!(
            self.label,
            Some(ConstraintLabel {
                marker: NameMarker::DoubleColon,
                ..
            })
        )
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// One bound declaration, stored in the shape it was written.
///
/// Variant names encode token shape (which side the value sat on), not
/// semantic direction: `x <= 5` is `Lower` with a less-than operator. The
/// operator is stored exactly as read; direction analysis is the
/// consumer's job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    /// `x free`
    Free { variable: SmolStr },
    /// `0 <= x <= 10`
    Range {
        lower: NumericValue,
        op1: ComparisonOperator,
        variable: SmolStr,
        op2: ComparisonOperator,
        upper: NumericValue,
    },
    /// `x >= 0` (variable first, value on the right)
    Lower {
        variable: SmolStr,
        op: ComparisonOperator,
        value: NumericValue,
    },
    /// `5 >= x` (value first, value on the left)
    Upper {
        value: NumericValue,
        op: ComparisonOperator,
        variable: SmolStr,
    },
}

impl Bound {
    pub fn variable(&self) -> &str {
        match self {
            Bound::Free { variable }
            | Bound::Range { variable, .. }
            | Bound::Lower { variable, .. }
            | Bound::Upper { variable, .. } => variable.as_str(),
        }
    }
}

// ============================================================================
// Variable classes
// ============================================================================

/// Declarable variable classes.
///
/// Default continuous variables have no class; a variable may be declared
/// into more than one class, which the parser records without judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableClass {
    Generals,
    Integers,
    Binaries,
    SemiContinuous,
}

impl VariableClass {
    pub const ALL: [VariableClass; 4] = [
        VariableClass::Generals,
        VariableClass::Integers,
        VariableClass::Binaries,
        VariableClass::SemiContinuous,
    ];
}

// ============================================================================
// SOS constraints
// ============================================================================

/// SOS constraint type: at most one (S1) or two adjacent (S2) nonzeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SosType {
    S1,
    S2,
}

/// One weighted entry of an SOS constraint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SosEntry {
    pub variable: SmolStr,
    pub weight: NumericValue,
}

impl SosEntry {
    pub fn new(variable: impl Into<SmolStr>, weight: NumericValue) -> Self {
        Self {
            variable: variable.into(),
            weight,
        }
    }
}

/// One SOS constraint: a named group of weighted entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SosConstraint {
    pub name: SmolStr,
    pub sos_type: SosType,
    pub entries: Vec<SosEntry>,
}

// ============================================================================
// Model
// ============================================================================

/// A parsed LP model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    pub sense: Sense,
    /// Never empty: the grammar requires at least one objective.
    pub objectives: Vec<Objective>,
    pub constraints: Vec<Constraint>,
    /// Class membership in declaration order; repeated sections of the same
    /// class merge by union.
    pub variable_classes: IndexMap<VariableClass, IndexSet<SmolStr>>,
    pub bounds: Vec<Bound>,
    pub sos_constraints: Vec<SosConstraint>,
    /// Whether the input ended with the `End` marker.
    pub has_end_marker: bool,
}

impl Model {
    pub fn objective_count(&self) -> usize {
        self.objectives.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Variables declared into `class`, in declaration order.
    pub fn variables_in_class(&self, class: VariableClass) -> impl Iterator<Item = &str> + '_ {
        self.variable_classes
            .get(&class)
            .into_iter()
            .flatten()
            .map(SmolStr::as_str)
    }

    /// Every distinct variable name in the model, in first-seen order,
    /// drawn from objectives, constraints, bounds, classes, and SOS
    /// entries.
    pub fn variable_names(&self) -> Vec<SmolStr> {
        let mut seen: IndexSet<SmolStr> = IndexSet::new();
        for objective in &self.objectives {
            for term in &objective.expression {
                seen.insert(term.variable.clone());
            }
        }
        for constraint in &self.constraints {
            for term in &constraint.lhs {
                seen.insert(term.variable.clone());
            }
        }
        for bound in &self.bounds {
            seen.insert(SmolStr::new(bound.variable()));
        }
        for members in self.variable_classes.values() {
            for name in members {
                seen.insert(name.clone());
            }
        }
        for sos in &self.sos_constraints {
            for entry in &sos.entries {
                seen.insert(entry.variable.clone());
            }
        }
        seen.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_product_matches_reconciliation_table() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
    }

    #[test]
    fn numeric_value_folds_sign_and_magnitude() {
        assert_eq!(NumericValue::finite(2.5).value(), 2.5);
        assert_eq!(NumericValue::finite(-2.5).value(), -2.5);
        assert_eq!(
            NumericValue::infinite(Sign::Negative).value(),
            f64::NEG_INFINITY
        );
        assert!(NumericValue::infinite(Sign::Positive).is_infinite());
    }

    #[test]
    fn reconciled_double_negative_is_positive() {
        let value = NumericValue::reconciled(Sign::Negative, Sign::Negative, Magnitude::Infinite);
        assert_eq!(value.sign, Sign::Positive);
        assert_eq!(value.value(), f64::INFINITY);
    }

    #[test]
    fn bare_term_coefficient_defaults_to_one() {
        let term = SignedTerm::new(Sign::Positive, Coefficient::default(), "x1");
        assert_eq!(term.signed_coefficient(), 1.0);
    }

    #[test]
    fn infinite_coefficient_keeps_embedded_sign() {
        let term = SignedTerm::new(Sign::Negative, Coefficient::Infinity(Sign::Negative), "x1");
        assert_eq!(term.coefficient, Coefficient::Infinity(Sign::Negative));
        assert_eq!(term.signed_coefficient(), f64::INFINITY);
    }

    #[test]
    fn operator_direction_helpers() {
        assert!(ComparisonOperator::Le.is_less());
        assert!(ComparisonOperator::Lt.is_less());
        assert!(ComparisonOperator::Ge.is_greater());
        assert!(ComparisonOperator::Gt.is_greater());
        assert!(ComparisonOperator::Eq.is_equality());
        assert!(!ComparisonOperator::Eq.is_less());
    }

    #[test]
    fn lazy_marker_is_preserved() {
        let constraint = Constraint {
            label: Some(ConstraintLabel::new("c1", NameMarker::DoubleColon)),
            lhs: LinearExpression::new(vec![SignedTerm::new(
                Sign::Positive,
                Coefficient::default(),
                "x",
            )]),
            operator: ComparisonOperator::Le,
            rhs: NumericValue::finite(1.0),
        };
        assert!(constraint.is_lazy());
        assert_eq!(constraint.name(), Some("c1"));
    }

    #[test]
    fn variable_names_first_seen_order() {
        let model = Model {
            sense: Sense::Minimize,
            objectives: vec![Objective::unnamed(LinearExpression::new(vec![
                SignedTerm::new(Sign::Positive, Coefficient::default(), "x2"),
                SignedTerm::new(Sign::Positive, Coefficient::default(), "x1"),
            ]))],
            constraints: vec![],
            variable_classes: IndexMap::from([(
                VariableClass::Binaries,
                IndexSet::from([SmolStr::new("x3"), SmolStr::new("x1")]),
            )]),
            bounds: vec![Bound::Free {
                variable: SmolStr::new("x4"),
            }],
            sos_constraints: vec![],
            has_end_marker: false,
        };
        let names = model.variable_names();
        assert_eq!(names, ["x2", "x1", "x4", "x3"]);
    }
}
