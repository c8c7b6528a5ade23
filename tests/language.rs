use std::fs;

use ferrocalc::{
    EvaluationError,
    error::{LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::parser::core::MAX_NESTING_DEPTH,
    util::num::format_result,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(value == expected || (value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn evaluation_error(src: &str) -> EvaluationError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_lex_failure(src: &str) -> LexError {
    match evaluation_error(src) {
        EvaluationError::Lex(e) => e,
        other => panic!("{src:?} failed with {other:?}, expected a lex error"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match evaluation_error(src) {
        EvaluationError::Parse(e) => e,
        other => panic!("{src:?} failed with {other:?}, expected a parse error"),
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match evaluation_error(src) {
        EvaluationError::Runtime(e) => e,
        other => panic!("{src:?} failed with {other:?}, expected a runtime error"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3^2", 18.0);
    assert_value("1 + 6 % 4", 3.0);
}

#[test]
fn associativity() {
    assert_value("10-3-2", 5.0);
    assert_value("64/4/2", 8.0);
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn unary_sign_binds_to_the_next_primary() {
    assert_value("-2^2", 4.0);
    assert_value("-(2^2)", -4.0);
    assert_value("3 - -2", 5.0);
    assert_value("+5", 5.0);
    assert_value("-(-(3))", 3.0);
    assert_value("2^-2^2", 16.0);
}

#[test]
fn floored_modulo_follows_divisor_sign() {
    assert_value("-7 % 3", 2.0);
    assert_value("7 % -3", -2.0);
    assert_value("-7 % -3", -1.0);
    assert_value("6 % 3", 0.0);
}

#[test]
fn fixture_expressions() {
    let contents = fs::read_to_string("tests/expressions.calc").expect("missing fixture file");
    let mut count = 0;

    for line in contents.lines()
                        .map(str::trim)
                        .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        let (expression, expected) = line.split_once("=>")
                                         .unwrap_or_else(|| panic!("Malformed fixture line {line:?}"));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("Bad expected value in {line:?}: {e}"));
        assert_value(expression, expected);
        count += 1;
    }

    assert!(count > 0, "No expressions found in tests/expressions.calc");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_runtime_failure("5/0"), RuntimeError::DivisionByZero { position: 1 }));
    assert!(matches!(assert_runtime_failure("1 / (2 - 2)"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_runtime_failure("1 / -0"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn modulo_by_zero_is_error() {
    assert!(matches!(assert_runtime_failure("5%0"), RuntimeError::ModuloByZero { position: 1 }));
    assert!(matches!(assert_runtime_failure("5 % 0.0"), RuntimeError::ModuloByZero { .. }));
}

#[test]
fn tiny_divisors_are_not_zero() {
    let tiny = format!("0.{}1", "0".repeat(299));
    assert_value(&format!("1 / {tiny}"), 1.0 / 1e-300);
    assert!(evaluate(&format!("1 % {tiny}")).is_ok());
}

#[test]
fn exponentiation_outside_the_reals_is_error() {
    assert!(matches!(assert_runtime_failure("(-8) ^ 0.5"),
                     RuntimeError::DomainError { base, exponent, position: 5 }
                     if base == -8.0 && exponent == 0.5));
    assert!(matches!(assert_runtime_failure("0 ^ -1"), RuntimeError::DomainError { .. }));
    assert!(matches!(assert_runtime_failure("10 ^ 400"), RuntimeError::DomainError { .. }));
    assert_value("(-8) ^ 3", -512.0);
}

#[test]
fn malformed_input_is_parse_error() {
    assert!(matches!(assert_parse_failure("(1+2"),
                     ParseError::ExpectedClosingParen { position: 4 }));
    assert!(matches!(assert_parse_failure("1+"),
                     ParseError::UnexpectedEndOfInput { position: 2 }));
    assert!(matches!(assert_parse_failure("1 2"),
                     ParseError::UnexpectedTrailingTokens { position: 2, .. }));
    assert!(matches!(assert_parse_failure("()"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("* 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("1 + 2)"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(assert_parse_failure(""), ParseError::UnexpectedEndOfInput { position: 0 }));
    assert!(matches!(assert_parse_failure("   "), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn unknown_character_is_lex_error() {
    assert_eq!(assert_lex_failure("1+a"),
               LexError::UnknownCharacter { character: 'a',
                                            position:  2, });
    assert_eq!(assert_lex_failure("1e5"),
               LexError::UnknownCharacter { character: 'e',
                                            position:  1, });
    assert_eq!(assert_lex_failure("2 × 3"),
               LexError::UnknownCharacter { character: '×',
                                            position:  2, });
    assert_eq!(assert_lex_failure("π + 1 $"),
               LexError::UnknownCharacter { character: 'π',
                                            position:  0, });
    assert!(matches!(assert_lex_failure("."), LexError::UnknownCharacter { character: '.', .. }));
}

#[test]
fn multiple_decimal_points_are_lex_error() {
    assert_eq!(assert_lex_failure("1 + 1.2.3"),
               LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                           position: 4, });
    assert!(matches!(assert_lex_failure("1.."), LexError::MalformedNumber { .. }));
}

#[test]
fn deeply_nested_parentheses_are_parse_error() {
    let src = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(assert_parse_failure(&src), ParseError::NestingTooDeep { .. }));

    let src = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&src, 1.0);
}

#[test]
fn long_runs_of_signs_are_parse_error() {
    let src = format!("{}1", "-".repeat(200_000));
    assert!(matches!(assert_parse_failure(&src), ParseError::NestingTooDeep { .. }));

    let src = format!("{}1", "+".repeat(200_000));
    assert!(matches!(assert_parse_failure(&src), ParseError::NestingTooDeep { .. }));

    assert_value(&format!("{}1", "-".repeat(100)), 1.0);
}

#[test]
fn long_operator_chains_are_parse_error() {
    let src = format!("{}1", "1+".repeat(200_000));
    assert!(matches!(assert_parse_failure(&src), ParseError::NestingTooDeep { .. }));

    let src = format!("{}1", "1^".repeat(200_000));
    assert!(matches!(assert_parse_failure(&src), ParseError::NestingTooDeep { .. }));

    assert_value(&format!("{}1", "1+".repeat(MAX_NESTING_DEPTH / 2)),
                 (MAX_NESTING_DEPTH / 2 + 1) as f64);
}

#[test]
fn non_finite_results_have_no_display_form() {
    let huge = "9".repeat(400);
    let nan = evaluate(&format!("{huge} - {huge}")).unwrap();
    assert!(nan.is_nan());
    assert_eq!(format_result(nan), None);

    let inf = evaluate("10 ^ 308 * 10").unwrap();
    assert!(inf.is_infinite());
    assert_eq!(format_result(inf), None);

    assert_eq!(format_result(evaluate("10 ^ 308").unwrap()).map(|s| s.len()),
               Some(309));
}

#[test]
fn lex_errors_win_over_parse_errors() {
    assert!(matches!(evaluation_error("(1 + $"), EvaluationError::Lex(_)));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate("1 + 2").unwrap(), evaluate("1+2").unwrap());
    assert_value("\t( 1\n+ 2 )\r\n* 3 ", 9.0);
    assert_value("\u{00a0}4\u{2003}*\u{3000}2", 8.0);
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(evaluation_error("1+a").to_string(),
               "Unknown character 'a' at position 2.");
    assert_eq!(evaluation_error("5/0").to_string(), "Division by zero at position 1.");
    assert_eq!(evaluation_error("1 2").to_string(),
               "Unexpected trailing token '2' at position 2 after a complete expression.");
    assert_eq!(evaluation_error(&format!("{}1", "-".repeat(1000))).to_string(),
               format!("Expression is nested too deeply at position {}.",
                       MAX_NESTING_DEPTH + 1));
}
