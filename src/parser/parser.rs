//! Recursive descent parser for the LP format
//!
//! Consumes the lazy token stream from the lexer, classifies keyword
//! spellings contextually (see `keywords`), and builds a typed
//! [`Model`]. One method per grammar production, at most a three-token
//! lookahead window, first error fatal.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;
use text_size::TextSize;
use tracing::{debug, trace};

use crate::syntax::{
    Bound, Coefficient, ComparisonOperator, Constraint, ConstraintLabel, LinearExpression,
    Magnitude, Model, NameMarker, NumericValue, Objective, Sense, Sign, SignedTerm, SosConstraint,
    SosEntry, VariableClass,
};

use super::error::{Expectation, ParseError, ParseResult, StructuralIssue};
use super::keywords::{self, SectionKeyword};
use super::lexer::{Lexer, Token, TokenKind};

/// Parse a complete LP model.
///
/// The input must be a whole model, sense through optional `End`. On
/// success every construct is recorded in the order it was read; on
/// failure the error names the first point in the text that does not fit.
pub fn parse(input: &str) -> Result<Model, ParseError> {
    let model = Parser::new(input).parse_model()?;
    debug!(
        objectives = model.objective_count(),
        constraints = model.constraint_count(),
        "parsed LP model"
    );
    Ok(model)
}

/// The parser state for a single `parse` call.
struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    /// Lookahead window over the lazy lexer; never grows past three tokens.
    peeked: VecDeque<Token<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            peeked: VecDeque::new(),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Pull tokens until the window holds `n + 1` of them or the input ends.
    /// A lexer failure surfaces here, which keeps errors in text order.
    fn fill(&mut self, n: usize) -> ParseResult<()> {
        while self.peeked.len() <= n {
            match self.lexer.next() {
                Some(Ok(token)) => self.peeked.push_back(token),
                Some(Err(error)) => return Err(ParseError::lex(self.input, error)),
                None => break,
            }
        }
        Ok(())
    }

    fn peek(&mut self) -> ParseResult<Option<Token<'a>>> {
        self.fill(0)?;
        Ok(self.peeked.front().copied())
    }

    fn peek_nth(&mut self, n: usize) -> ParseResult<Option<Token<'a>>> {
        self.fill(n)?;
        Ok(self.peeked.get(n).copied())
    }

    fn at(&mut self, kind: TokenKind) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|token| token.kind == kind))
    }

    fn at_comparison_operator(&mut self) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|token| {
            matches!(
                token.kind,
                TokenKind::Le | TokenKind::Ge | TokenKind::Lt | TokenKind::Gt | TokenKind::Eq
            )
        }))
    }

    /// Offset of the next token, or the end of the input.
    fn current_offset(&mut self) -> ParseResult<TextSize> {
        Ok(match self.peek()? {
            Some(token) => token.offset(),
            None => TextSize::of(self.input),
        })
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> ParseResult<Option<Token<'a>>> {
        self.fill(0)?;
        Ok(self.peeked.pop_front())
    }

    fn eat(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.at(kind)? {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static [Expectation],
    ) -> ParseResult<Token<'a>> {
        match self.peek()? {
            Some(token) if token.kind == kind => {
                self.bump()?;
                Ok(token)
            }
            Some(token) => Err(self.unexpected(expected, &token)),
            None => Err(self.incomplete(expected)),
        }
    }

    /// Consume a `+`/`-` operator token if one is next.
    fn eat_sign(&mut self) -> ParseResult<Option<Sign>> {
        if self.eat(TokenKind::Plus)? {
            Ok(Some(Sign::Positive))
        } else if self.eat(TokenKind::Minus)? {
            Ok(Some(Sign::Negative))
        } else {
            Ok(None)
        }
    }

    /// The identifier that must follow a coefficient or sign.
    fn expect_variable(&mut self) -> ParseResult<SmolStr> {
        let token = self.expect(TokenKind::Word, &[Expectation::Identifier])?;
        Ok(SmolStr::new(token.text))
    }

    // =========================================================================
    // Keyword classification
    // =========================================================================

    /// Section keyword the next token spells, if any.
    fn at_section_keyword(&mut self) -> ParseResult<Option<SectionKeyword>> {
        match self.peek()? {
            Some(token) if token.kind == TokenKind::Word => {
                Ok(keywords::section_keyword(token.text))
            }
            _ => Ok(None),
        }
    }

    /// Does the upcoming token (or pair of tokens) spell the constraints
    /// header. Two-word spellings match across any amount of trivia.
    fn at_subject_to(&mut self) -> ParseResult<bool> {
        let Some(first) = self.peek()? else {
            return Ok(false);
        };
        if first.kind != TokenKind::Word {
            return Ok(false);
        }
        if keywords::subject_to_single(first.text) {
            return Ok(true);
        }
        match self.peek_nth(1)? {
            Some(second) if second.kind == TokenKind::Word => {
                Ok(keywords::subject_to_pair(first.text, second.text))
            }
            _ => Ok(false),
        }
    }

    /// Consume the constraints header and its optional trailing `:`.
    fn eat_subject_to(&mut self) -> ParseResult<bool> {
        if !self.at_subject_to()? {
            return Ok(false);
        }
        let first = self.expect(TokenKind::Word, &[Expectation::SubjectTo])?;
        if !keywords::subject_to_single(first.text) {
            self.expect(TokenKind::Word, &[Expectation::SubjectTo])?;
        }
        self.eat(TokenKind::Colon)?;
        Ok(true)
    }

    // =========================================================================
    // Error building
    // =========================================================================

    fn unexpected(&self, expected: &'static [Expectation], token: &Token<'_>) -> ParseError {
        ParseError::unexpected(self.input, expected, token)
    }

    fn incomplete(&self, expected: &'static [Expectation]) -> ParseError {
        ParseError::incomplete(self.input, expected)
    }

    fn structural(&self, issue: StructuralIssue, offset: TextSize) -> ParseError {
        ParseError::structural(self.input, issue, offset)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Model = Sense Objectives Constraints Section* End?
    fn parse_model(&mut self) -> ParseResult<Model> {
        let sense = self.parse_sense()?;
        let objectives = self.parse_objectives()?;
        let constraints = self.parse_constraints()?;

        let mut bounds = Vec::new();
        let mut variable_classes: IndexMap<VariableClass, IndexSet<SmolStr>> = IndexMap::new();
        let mut sos_constraints = Vec::new();
        let mut has_end_marker = false;

        const EXPECTED: &[Expectation] = &[Expectation::SectionKeyword, Expectation::EndKeyword];
        while let Some(token) = self.peek()? {
            if token.kind != TokenKind::Word {
                return Err(self.unexpected(EXPECTED, &token));
            }
            let Some(keyword) = keywords::section_keyword(token.text) else {
                return Err(self.unexpected(EXPECTED, &token));
            };
            self.bump()?;
            trace!(section = token.text, "section");
            match keyword {
                SectionKeyword::Bounds => self.parse_bounds_section(&mut bounds)?,
                SectionKeyword::Generals => {
                    self.parse_class_section(VariableClass::Generals, &mut variable_classes)?;
                }
                SectionKeyword::Integers => {
                    self.parse_class_section(VariableClass::Integers, &mut variable_classes)?;
                }
                SectionKeyword::Binaries => {
                    self.parse_class_section(VariableClass::Binaries, &mut variable_classes)?;
                }
                SectionKeyword::SemiContinuous => {
                    self.parse_class_section(VariableClass::SemiContinuous, &mut variable_classes)?;
                }
                SectionKeyword::Sos => self.parse_sos_section(&mut sos_constraints)?,
                SectionKeyword::End => {
                    has_end_marker = true;
                    if let Some(extra) = self.peek()? {
                        return Err(self.unexpected(&[Expectation::EndOfInput], &extra));
                    }
                    break;
                }
            }
        }

        Ok(Model {
            sense,
            objectives,
            constraints,
            variable_classes,
            bounds,
            sos_constraints,
            has_end_marker,
        })
    }

    /// Sense = one of the minimize/maximize spellings, any case
    fn parse_sense(&mut self) -> ParseResult<Sense> {
        const EXPECTED: &[Expectation] = &[Expectation::SenseKeyword];
        match self.peek()? {
            Some(token) if token.kind == TokenKind::Word => {
                match keywords::sense_keyword(token.text) {
                    Some(sense) => {
                        self.bump()?;
                        Ok(sense)
                    }
                    None => Err(self.unexpected(EXPECTED, &token)),
                }
            }
            Some(token) => Err(self.unexpected(EXPECTED, &token)),
            None => Err(self.incomplete(EXPECTED)),
        }
    }

    /// Objectives = LinearExpression NamedObjective* | NamedObjective+
    ///
    /// Consumes the constraints header that terminates the list. The header
    /// spellings take priority over identifier readings at this decision
    /// point, so an objective cannot be a bare variable named `st`.
    fn parse_objectives(&mut self) -> ParseResult<Vec<Objective>> {
        trace!("objectives");
        let mut objectives = Vec::new();
        loop {
            if self.at_subject_to()? {
                if objectives.is_empty() {
                    let offset = self.current_offset()?;
                    return Err(self.structural(StructuralIssue::EmptyExpression, offset));
                }
                self.eat_subject_to()?;
                break;
            }

            let named = match (self.peek()?, self.peek_nth(1)?) {
                (Some(first), Some(second)) => {
                    first.kind == TokenKind::Word && second.kind == TokenKind::Colon
                }
                _ => false,
            };
            if named {
                let name = self.expect(TokenKind::Word, &[Expectation::Identifier])?;
                self.expect(TokenKind::Colon, &[Expectation::Colon])?;
                let expression = self.parse_objective_expression()?;
                objectives.push(Objective::named(name.text, expression));
                continue;
            }

            if objectives.is_empty() {
                let expression = self.parse_objective_expression()?;
                objectives.push(Objective::unnamed(expression));
                continue;
            }

            match self.peek()? {
                Some(token) if token.kind == TokenKind::Word => {
                    return Err(self.structural(
                        StructuralIssue::MultipleUnnamedObjectives,
                        token.offset(),
                    ));
                }
                Some(token) => return Err(self.unexpected(&[Expectation::SubjectTo], &token)),
                None => return Err(self.incomplete(&[Expectation::SubjectTo])),
            }
        }
        Ok(objectives)
    }

    /// An objective expression; the constraints header right where a term
    /// should start means the objective's sum is empty.
    fn parse_objective_expression(&mut self) -> ParseResult<LinearExpression> {
        if self.at_subject_to()? {
            let offset = self.current_offset()?;
            return Err(self.structural(StructuralIssue::EmptyExpression, offset));
        }
        self.parse_linear_expression()
    }

    /// LinearExpression = ('+' | '-')? Term (('+' | '-') Term)*
    ///
    /// A signed infinity lexeme in operator position supplies both the
    /// operator and an unsigned infinite coefficient: `x +inf y` reads as
    /// `x + inf y`.
    fn parse_linear_expression(&mut self) -> ParseResult<LinearExpression> {
        let mut terms = Vec::new();

        let first = match self.eat_sign()? {
            Some(sign) => self.parse_term(sign)?,
            None => match self.peek()? {
                Some(token) if is_term_start(token.kind) => self.parse_term(Sign::Positive)?,
                Some(token) => {
                    return Err(self.structural(StructuralIssue::EmptyExpression, token.offset()));
                }
                None => return Err(self.incomplete(&[Expectation::Term])),
            },
        };
        terms.push(first);

        loop {
            let Some(token) = self.peek()? else { break };
            let term = match token.kind {
                TokenKind::Plus => {
                    self.bump()?;
                    self.parse_term(Sign::Positive)?
                }
                TokenKind::Minus => {
                    self.bump()?;
                    self.parse_term(Sign::Negative)?
                }
                TokenKind::Infinity => {
                    let Some(sign) = embedded_sign(token.text) else {
                        // an unsigned infinity cannot continue the sum
                        break;
                    };
                    self.bump()?;
                    let variable = self.expect_variable()?;
                    SignedTerm::new(sign, Coefficient::Infinity(Sign::Positive), variable)
                }
                _ => break,
            };
            terms.push(term);
        }

        Ok(LinearExpression::new(terms))
    }

    /// Term = Number Identifier | Infinity Identifier | Identifier
    ///
    /// Any sign operator is already consumed; a failure here means the
    /// sign had no term after it.
    fn parse_term(&mut self, sign: Sign) -> ParseResult<SignedTerm> {
        const EXPECTED: &[Expectation] = &[Expectation::Term];
        match self.peek()? {
            Some(token) => match token.kind {
                TokenKind::Number => {
                    self.bump()?;
                    let coefficient = coefficient_from_number(token.text);
                    let variable = self.expect_variable()?;
                    Ok(SignedTerm::new(sign, coefficient, variable))
                }
                TokenKind::Infinity => {
                    self.bump()?;
                    let inner = embedded_sign(token.text).unwrap_or_default();
                    let variable = self.expect_variable()?;
                    Ok(SignedTerm::new(sign, Coefficient::Infinity(inner), variable))
                }
                TokenKind::Word => {
                    self.bump()?;
                    Ok(SignedTerm::new(
                        sign,
                        Coefficient::default(),
                        SmolStr::new(token.text),
                    ))
                }
                _ => Err(self.unexpected(EXPECTED, &token)),
            },
            None => Err(self.incomplete(EXPECTED)),
        }
    }

    /// Constraints = Constraint*
    ///
    /// The header was consumed by the objectives parser; the list ends at
    /// an expected section keyword, at a token no constraint can start
    /// with, or at end of input.
    fn parse_constraints(&mut self) -> ParseResult<Vec<Constraint>> {
        trace!("constraints");
        let mut constraints = Vec::new();
        loop {
            let Some(token) = self.peek()? else { break };
            if self.at_section_keyword()?.is_some() || !is_constraint_start(token.kind) {
                break;
            }
            constraints.push(self.parse_constraint()?);
        }
        Ok(constraints)
    }

    /// Constraint = (Identifier (':' | '::'))? LinearExpression CmpOp NumericValue
    fn parse_constraint(&mut self) -> ParseResult<Constraint> {
        let label = self.eat_constraint_label()?;
        let lhs = self.parse_linear_expression()?;
        let operator = self.parse_comparison_operator(&[
            Expectation::TermOperator,
            Expectation::ComparisonOperator,
        ])?;
        let rhs = self.parse_numeric_value(&[Expectation::NumericValue])?;
        Ok(Constraint {
            label,
            lhs,
            operator,
            rhs,
        })
    }

    /// Two-token lookahead for `name:` / `name::`. A colon never otherwise
    /// appears inside an expression, so this cannot misread a term.
    fn eat_constraint_label(&mut self) -> ParseResult<Option<ConstraintLabel>> {
        let Some(first) = self.peek()? else {
            return Ok(None);
        };
        if first.kind != TokenKind::Word {
            return Ok(None);
        }
        let marker = match self.peek_nth(1)? {
            Some(second) if second.kind == TokenKind::Colon => NameMarker::Colon,
            Some(second) if second.kind == TokenKind::DoubleColon => NameMarker::DoubleColon,
            _ => return Ok(None),
        };
        self.bump()?;
        self.bump()?;
        Ok(Some(ConstraintLabel::new(first.text, marker)))
    }

    /// CmpOp = '<=' | '>=' | '<' | '>' | '='
    fn parse_comparison_operator(
        &mut self,
        expected: &'static [Expectation],
    ) -> ParseResult<ComparisonOperator> {
        match self.peek()? {
            Some(token) => {
                let operator = match token.kind {
                    TokenKind::Le => ComparisonOperator::Le,
                    TokenKind::Ge => ComparisonOperator::Ge,
                    TokenKind::Lt => ComparisonOperator::Lt,
                    TokenKind::Gt => ComparisonOperator::Gt,
                    TokenKind::Eq => ComparisonOperator::Eq,
                    _ => return Err(self.unexpected(expected, &token)),
                };
                self.bump()?;
                Ok(operator)
            }
            None => Err(self.incomplete(expected)),
        }
    }

    /// NumericValue = ('+' | '-')? (Number | Infinity)
    ///
    /// The outer sign token and the sign embedded in an infinity lexeme
    /// reconcile by multiplication, so `- -inf` is positive infinity.
    fn parse_numeric_value(
        &mut self,
        expected: &'static [Expectation],
    ) -> ParseResult<NumericValue> {
        let outer = self.eat_sign()?.unwrap_or_default();
        match self.peek()? {
            Some(token) => match token.kind {
                TokenKind::Number => {
                    self.bump()?;
                    let magnitude = magnitude_from_number(token.text);
                    Ok(NumericValue::reconciled(outer, Sign::Positive, magnitude))
                }
                TokenKind::Infinity => {
                    self.bump()?;
                    let inner = embedded_sign(token.text).unwrap_or_default();
                    Ok(NumericValue::reconciled(outer, inner, Magnitude::Infinite))
                }
                _ => Err(self.unexpected(expected, &token)),
            },
            None => Err(self.incomplete(expected)),
        }
    }

    /// BoundsSection = Bound*
    ///
    /// Bound = Identifier 'free'
    ///       | Identifier CmpOp NumericValue
    ///       | NumericValue CmpOp Identifier (CmpOp NumericValue)?
    fn parse_bounds_section(&mut self, bounds: &mut Vec<Bound>) -> ParseResult<()> {
        loop {
            let Some(token) = self.peek()? else { break };
            match token.kind {
                TokenKind::Word => {
                    if keywords::section_keyword(token.text).is_some() {
                        break;
                    }
                    bounds.push(self.parse_variable_first_bound()?);
                }
                TokenKind::Number | TokenKind::Infinity | TokenKind::Plus | TokenKind::Minus => {
                    bounds.push(self.parse_value_first_bound()?);
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// `x free` or `x <= 5`: the token after the variable decides.
    fn parse_variable_first_bound(&mut self) -> ParseResult<Bound> {
        let variable = self.expect_variable()?;
        if let Some(token) = self.peek()? {
            if token.kind == TokenKind::Word && keywords::is_free_keyword(token.text) {
                self.bump()?;
                return Ok(Bound::Free { variable });
            }
        }
        let op = self.parse_comparison_operator(&[
            Expectation::FreeKeyword,
            Expectation::ComparisonOperator,
        ])?;
        let value = self.parse_numeric_value(&[Expectation::NumericValue])?;
        Ok(Bound::Lower {
            variable,
            op,
            value,
        })
    }

    /// `0 <= x <= 10` or `5 >= x`: a second comparison operator after the
    /// variable upgrades the bound to a range.
    fn parse_value_first_bound(&mut self) -> ParseResult<Bound> {
        let value = self.parse_numeric_value(&[Expectation::NumericValue])?;
        let op1 = self.parse_comparison_operator(&[Expectation::ComparisonOperator])?;
        let variable = self.expect_variable()?;
        if self.at_comparison_operator()? {
            let op2 = self.parse_comparison_operator(&[Expectation::ComparisonOperator])?;
            let upper = self.parse_numeric_value(&[Expectation::NumericValue])?;
            Ok(Bound::Range {
                lower: value,
                op1,
                variable,
                op2,
                upper,
            })
        } else {
            Ok(Bound::Upper {
                value,
                op: op1,
                variable,
            })
        }
    }

    /// ClassSection = Identifier*
    ///
    /// The member list stops at the next expected section keyword, so a
    /// variable in it can never spell `bin` or `end`. Repeated sections of
    /// the same class merge by union.
    fn parse_class_section(
        &mut self,
        class: VariableClass,
        classes: &mut IndexMap<VariableClass, IndexSet<SmolStr>>,
    ) -> ParseResult<()> {
        let members = classes.entry(class).or_default();
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind != TokenKind::Word || keywords::section_keyword(token.text).is_some() {
                break;
            }
            self.bump()?;
            members.insert(SmolStr::new(token.text));
        }
        Ok(())
    }

    /// SosSection = (Header | Entry)*
    ///
    /// Header = Identifier ':' SosType '::'
    /// Entry  = Identifier ':' NumericValue
    ///
    /// The token stream is flat; a header starts a group and every entry
    /// attaches to the most recent header of the same section. An entry
    /// before the first header of its section has nowhere to go.
    fn parse_sos_section(&mut self, sos_constraints: &mut Vec<SosConstraint>) -> ParseResult<()> {
        let started_at = sos_constraints.len();
        loop {
            let Some(token) = self.peek()? else { break };
            if token.kind != TokenKind::Word || keywords::section_keyword(token.text).is_some() {
                break;
            }
            self.bump()?;
            let name = SmolStr::new(token.text);
            self.expect(TokenKind::Colon, &[Expectation::Colon])?;

            let sos_type = match self.peek()? {
                Some(next) if next.kind == TokenKind::Word => keywords::sos_type(next.text),
                _ => None,
            };
            if let Some(sos_type) = sos_type {
                self.bump()?;
                self.expect(TokenKind::DoubleColon, &[Expectation::DoubleColon])?;
                sos_constraints.push(SosConstraint {
                    name,
                    sos_type,
                    entries: Vec::new(),
                });
            } else {
                let weight =
                    self.parse_numeric_value(&[Expectation::SosType, Expectation::NumericValue])?;
                if sos_constraints.len() == started_at {
                    return Err(
                        self.structural(StructuralIssue::SosEntryBeforeHeader, token.offset())
                    );
                }
                if let Some(group) = sos_constraints.last_mut() {
                    group.entries.push(SosEntry::new(name, weight));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Lexeme helpers
// =============================================================================

/// Kinds that can start a term.
fn is_term_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number | TokenKind::Infinity | TokenKind::Word
    )
}

/// Kinds that can start a constraint: a label or term word, a
/// coefficient, or a leading sign.
fn is_constraint_start(kind: TokenKind) -> bool {
    is_term_start(kind) || matches!(kind, TokenKind::Plus | TokenKind::Minus)
}

/// The sign character embedded in an infinity lexeme, if it carries one.
fn embedded_sign(text: &str) -> Option<Sign> {
    match text.as_bytes().first() {
        Some(b'+') => Some(Sign::Positive),
        Some(b'-') => Some(Sign::Negative),
        _ => None,
    }
}

/// A number lexeme as a magnitude. Values beyond `f64` range fold to the
/// infinite magnitude.
fn magnitude_from_number(text: &str) -> Magnitude {
    let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
    if value.is_infinite() {
        Magnitude::Infinite
    } else {
        Magnitude::Finite(value)
    }
}

/// A number lexeme as a term coefficient, with the same overflow folding.
fn coefficient_from_number(text: &str) -> Coefficient {
    match magnitude_from_number(text) {
        Magnitude::Finite(value) => Coefficient::Finite(value),
        Magnitude::Infinite => Coefficient::Infinity(Sign::Positive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_model() {
        let model = parse("min x subject to x <= 1").expect("parse");
        assert_eq!(model.sense, Sense::Minimize);
        assert_eq!(model.objective_count(), 1);
        assert_eq!(model.constraint_count(), 1);
        assert!(!model.has_end_marker);
    }

    #[test]
    fn test_parse_named_objectives() {
        let model = parse("max obj1: 2 x1 + 3 x2 obj2: x3 s.t. x1 <= 1").expect("parse");
        assert_eq!(model.objectives[0].name.as_deref(), Some("obj1"));
        assert_eq!(model.objectives[1].name.as_deref(), Some("obj2"));
        assert_eq!(model.objectives[0].expression.len(), 2);
    }

    #[test]
    fn test_double_negative_infinity_reconciles_positive() {
        let model = parse("min x subject to x >= - -inf").expect("parse");
        let rhs = model.constraints[0].rhs;
        assert_eq!(rhs.sign, Sign::Positive);
        assert!(rhs.is_infinite());
    }

    #[test]
    fn test_signed_infinity_in_operator_position_splits() {
        let model = parse("min x +inf y subject to x <= 1").expect("parse");
        let terms = model.objectives[0].expression.terms();
        assert_eq!(terms[1].sign, Sign::Positive);
        assert_eq!(terms[1].coefficient, Coefficient::Infinity(Sign::Positive));
        assert_eq!(terms[1].variable, "y");
    }

    #[test]
    fn test_header_beats_variable_reading_at_objective_start() {
        let error = parse("min subject to x <= 1").unwrap_err();
        assert!(matches!(
            error,
            ParseError::Structural {
                issue: StructuralIssue::EmptyExpression,
                ..
            }
        ));
    }

    #[test]
    fn test_sos_entry_before_header_is_structural() {
        let error = parse("min x subject to x <= 1 sos e: 2").unwrap_err();
        assert!(matches!(
            error,
            ParseError::Structural {
                issue: StructuralIssue::SosEntryBeforeHeader,
                ..
            }
        ));
    }

    #[test]
    fn test_tokens_after_end_are_rejected() {
        let error = parse("min x subject to x <= 1 end x").unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedToken { .. }));
    }
}
