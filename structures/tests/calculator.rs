use structures::parsing_compilation::{evaluate, ExpressionCalculator};
use structures::EvalError;

#[test]
fn literal_scenarios() {
    let cases = [
        ("3 + 4", 7.0),
        ("3 + 4 * 2", 11.0),
        ("(3 + 4) * 2", 14.0),
        ("10 / (2 + 3)", 2.0),
        ("3.5 + 2.5 * 2", 8.5),
    ];
    let mut calc = ExpressionCalculator::new();
    for (expr, expected) in cases {
        assert_eq!(calc.evaluate(expr), Ok(expected), "{expr}");
        assert!(calc.is_idle());
    }
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(evaluate("10 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("0 / 5"), Ok(0.0));
}

#[test]
fn unclosed_parenthesis_is_an_error() {
    assert_eq!(evaluate("(3 + 4"), Err(EvalError::UnbalancedParentheses));
    assert_eq!(evaluate("((2)"), Err(EvalError::UnbalancedParentheses));
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(evaluate("2*3+4"), evaluate(" 2 * 3 + 4 "));
    assert_eq!(evaluate(".5+.5"), Ok(1.0));
}
