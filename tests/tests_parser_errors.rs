//! Parser Tests - Errors
//!
//! The error taxonomy, expected-set reporting, 1-based display positions,
//! and the first-error-wins ordering over the lazy token stream.

use lp_parse::parser::{Expectation, LexErrorKind, StructuralIssue};
use lp_parse::{ParseError, parse};
use rstest::rstest;

/// Helper: parse input that must fail.
fn parse_err(input: &str) -> ParseError {
    match parse(input) {
        Ok(model) => panic!("expected an error for `{input}`, got {model:?}"),
        Err(error) => error,
    }
}

// ============================================================================
// Lexical errors
// ============================================================================

#[test]
fn test_invalid_character() {
    let error = parse_err("min x st x <= 1 ^");
    match error {
        ParseError::Lex { kind, found, .. } => {
            assert_eq!(kind, LexErrorKind::InvalidCharacter);
            assert_eq!(found, Some('^'));
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn test_unterminated_block_comment() {
    let error = parse_err("min x st x <= 1 \\* never closed");
    assert!(matches!(
        error,
        ParseError::Lex {
            kind: LexErrorKind::UnterminatedBlockComment,
            ..
        }
    ));
}

#[test]
fn test_stray_star_inside_block_comment() {
    let error = parse_err("min x st \\* a * b *\\ x <= 1");
    assert!(matches!(
        error,
        ParseError::Lex {
            kind: LexErrorKind::BlockCommentStrayStar,
            ..
        }
    ));
}

// ============================================================================
// Unexpected tokens
// ============================================================================

#[test]
fn test_input_must_start_with_a_sense() {
    let error = parse_err("hello x st x <= 1");
    match error {
        ParseError::UnexpectedToken {
            expected, found, ..
        } => {
            assert!(expected.contains(&Expectation::SenseKeyword));
            assert_eq!(found, "hello");
        }
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn test_coefficient_requires_identifier() {
    let error = parse_err("min x st 5 <= 5");
    match error {
        ParseError::UnexpectedToken { expected, .. } => {
            assert!(expected.contains(&Expectation::Identifier));
        }
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn test_tokens_after_end_marker() {
    let error = parse_err("min x st x <= 1 end x");
    match error {
        ParseError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(expected, &[Expectation::EndOfInput]);
            assert_eq!(found, "x");
        }
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn test_section_position_reports_both_expectations() {
    let error = parse_err("min x st x <= 1 :");
    let message = error.to_string();
    assert!(
        message.contains("expected a section keyword or `End`"),
        "message: {message}"
    );
    assert!(message.contains("found `:`"), "message: {message}");
}

// ============================================================================
// Structural errors
// ============================================================================

#[rstest]
#[case("min subject to x <= 1", StructuralIssue::EmptyExpression)]
#[case("min obj: st x <= 1", StructuralIssue::EmptyExpression)]
#[case("min x st c1: <= 5", StructuralIssue::EmptyExpression)]
#[case("min x1 x2 st x1 <= 1", StructuralIssue::MultipleUnnamedObjectives)]
#[case("min x st x <= 1 sos e: 2", StructuralIssue::SosEntryBeforeHeader)]
fn test_structural_issues(#[case] input: &str, #[case] issue: StructuralIssue) {
    match parse_err(input) {
        ParseError::Structural { issue: actual, .. } => {
            assert_eq!(actual, issue, "input: {input}");
        }
        other => panic!("expected structural error for `{input}`, got {other:?}"),
    }
}

#[test]
fn test_entry_cannot_attach_to_a_previous_sos_section() {
    // the second section has no header of its own yet
    let input = "min x st x <= 1 sos a: s1 :: x: 1 bounds y free sos e: 2";
    assert!(matches!(
        parse_err(input),
        ParseError::Structural {
            issue: StructuralIssue::SosEntryBeforeHeader,
            ..
        }
    ));
}

// ============================================================================
// Incomplete input
// ============================================================================

#[rstest]
#[case("")]
#[case("min")]
#[case("min +")]
#[case("min x")]
#[case("min x +")]
#[case("min x st x")]
#[case("min x st x <=")]
#[case("min x st x <= 1 bounds z >=")]
fn test_incomplete_inputs(#[case] input: &str) {
    let error = parse_err(input);
    match error {
        ParseError::IncompleteInput { location, .. } => {
            assert_eq!(usize::from(location.offset), input.len(), "input: {input}");
        }
        other => panic!("expected incomplete-input error for `{input}`, got {other:?}"),
    }
}

#[test]
fn test_incomplete_input_names_the_missing_piece() {
    match parse_err("min x st x") {
        ParseError::IncompleteInput { expected, .. } => {
            assert!(expected.contains(&Expectation::ComparisonOperator));
        }
        other => panic!("expected incomplete-input error, got {other:?}"),
    }
}

// ============================================================================
// Positions and ordering
// ============================================================================

#[test]
fn test_locations_display_one_based() {
    let input = "min x\nsubject to\n  ^ x <= 1";
    let error = parse_err(input);
    assert_eq!(error.location().line(), 2);
    assert_eq!(error.location().column(), 2);
    assert!(
        error.to_string().contains("3:3"),
        "message: {}",
        error.to_string()
    );
}

#[test]
fn test_first_error_wins_over_later_garbage() {
    // the parse error at `<=` is reported; the `^` after it is never lexed
    let input = "min x + <= 1 ^";
    let error = parse_err(input);
    match error {
        ParseError::UnexpectedToken { found, location, .. } => {
            assert_eq!(found, "<=");
            assert!(usize::from(location.offset) < input.find('^').unwrap());
        }
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn test_lex_error_first_in_text_order() {
    // the `^` comes before the malformed objective list
    let error = parse_err("min ^ x1 x2 st x1 <= 1");
    assert!(matches!(error, ParseError::Lex { .. }));
}
