//! Two-stack infix evaluator for `+ - * /`, parentheses and decimal literals.
//!
//! Variables:
//!   numbers   : Stack<f64>      — operand stack
//!   operators : Stack<Pending>  — operators and open parentheses
//!
//! Equations:
//!   prec(+) = prec(-) = 1,  prec(*) = prec(/) = 2,  prec('(') = 0
//!   on operator o:  while top is an operator t with prec(t) >= prec(o): apply(t)
//!                   push o
//!   on ')':         apply until '(' is popped
//!   end of input:   apply everything left; a '(' left over is an error
//!   apply(o):       b = pop, a = pop, push(a o b)
//!
//! Both stacks are empty again whenever `evaluate` returns.

use std::fmt;

use tracing::{debug, trace};

use crate::data_structures::stack::Stack;
use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open,
    Op(Operator),
}

#[derive(Debug, Default)]
pub struct ExpressionCalculator {
    numbers: Stack<f64>,
    operators: Stack<Pending>,
}

impl ExpressionCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, expr: &str) -> Result<f64, EvalError> {
        let result = self.scan(expr);
        self.numbers.clear();
        self.operators.clear();
        match &result {
            Ok(value) => debug!(expr, value, "evaluated"),
            Err(error) => debug!(expr, %error, "evaluation failed"),
        }
        result
    }

    fn scan(&mut self, expr: &str) -> Result<f64, EvalError> {
        if expr.trim().is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        let mut chars = expr.char_indices().peekable();
        while let Some((pos, c)) = chars.next() {
            match c {
                c if c.is_whitespace() => {}
                c if c.is_ascii_digit() || c == '.' => {
                    let mut end = pos + c.len_utf8();
                    while let Some(&(i, d)) = chars.peek() {
                        if !(d.is_ascii_digit() || d == '.') {
                            break;
                        }
                        end = i + d.len_utf8();
                        chars.next();
                    }
                    let literal = &expr[pos..end];
                    let value = literal
                        .parse::<f64>()
                        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                    self.numbers.push(value);
                }
                '(' => self.operators.push(Pending::Open),
                ')' => loop {
                    match self.operators.pop() {
                        Ok(Pending::Open) => break,
                        Ok(Pending::Op(op)) => self.reduce(op)?,
                        Err(_) => return Err(EvalError::UnbalancedParentheses),
                    }
                },
                c => {
                    let op = Operator::from_char(c)
                        .ok_or(EvalError::UnexpectedCharacter { ch: c, position: pos })?;
                    self.reduce_while_at_least(op.precedence())?;
                    self.operators.push(Pending::Op(op));
                }
            }
        }

        while let Ok(pending) = self.operators.pop() {
            match pending {
                Pending::Open => return Err(EvalError::UnbalancedParentheses),
                Pending::Op(op) => self.reduce(op)?,
            }
        }

        let result = self.numbers.pop().map_err(|_| EvalError::EmptyExpression)?;
        if !self.numbers.is_empty() {
            return Err(EvalError::DanglingOperands(self.numbers.len() + 1));
        }
        Ok(result)
    }

    /// Apply stacked operators while the top binds at least as tightly as `precedence`.
    /// An open parenthesis (precedence 0) always stops the loop.
    fn reduce_while_at_least(&mut self, precedence: u8) -> Result<(), EvalError> {
        loop {
            let binds_tighter = matches!(
                self.operators.peek(),
                Ok(&Pending::Op(top)) if top.precedence() >= precedence
            );
            if !binds_tighter {
                return Ok(());
            }
            match self.operators.pop() {
                Ok(Pending::Op(top)) => self.reduce(top)?,
                Ok(Pending::Open) | Err(_) => return Ok(()),
            }
        }
    }

    fn reduce(&mut self, op: Operator) -> Result<(), EvalError> {
        let rhs = self.numbers.pop().map_err(|_| EvalError::InsufficientOperands(op.symbol()))?;
        let lhs = self.numbers.pop().map_err(|_| EvalError::InsufficientOperands(op.symbol()))?;
        let value = op.apply(lhs, rhs)?;
        trace!(%op, lhs, rhs, value, "applied operator");
        self.numbers.push(value);
        Ok(())
    }

    /// True when no intermediate state is left on either stack.
    pub fn is_idle(&self) -> bool {
        self.numbers.is_empty() && self.operators.is_empty()
    }
}

/// Evaluate a single expression with a fresh calculator.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    ExpressionCalculator::new().evaluate(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_precedence_is_left_associative() {
        assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
        assert_eq!(evaluate("8 / 4 / 2"), Ok(1.0));
    }

    #[test]
    fn reduction_stops_at_weaker_operator_or_parenthesis() {
        assert_eq!(evaluate("2 - 3 * 4 + 5"), Ok(-5.0));
        assert_eq!(evaluate("2 * (3 + 4 * 1) - 1"), Ok(13.0));
        let mut calc = ExpressionCalculator::new();
        assert_eq!(calc.evaluate("6 / 3 * (1 + 1)"), Ok(4.0));
        assert!(calc.is_idle());
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(evaluate("((1 + 2) * (3 + 4)) / 7"), Ok(3.0));
        assert_eq!(evaluate("2*(3+(4-1))"), Ok(12.0));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(evaluate("3 +"), Err(EvalError::InsufficientOperands('+')));
        assert_eq!(evaluate("-3"), Err(EvalError::InsufficientOperands('-')));
        assert_eq!(evaluate("3 + 4)"), Err(EvalError::UnbalancedParentheses));
        assert_eq!(evaluate("1.2.3 + 1"), Err(EvalError::InvalidNumber("1.2.3".into())));
        assert_eq!(
            evaluate("3 % 2"),
            Err(EvalError::UnexpectedCharacter { ch: '%', position: 2 })
        );
        assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
        assert_eq!(evaluate("3 4"), Err(EvalError::DanglingOperands(2)));
    }

    #[test]
    fn stacks_are_released_after_failure() {
        let mut calc = ExpressionCalculator::new();
        assert!(calc.evaluate("(1 + 2").is_err());
        assert!(calc.is_idle());
        assert_eq!(calc.evaluate("1 + 2"), Ok(3.0));
        assert!(calc.is_idle());
    }

    #[test]
    fn operator_table() {
        assert_eq!(Operator::from_char('*').map(Operator::precedence), Some(2));
        assert_eq!(Operator::from_char('-').map(Operator::precedence), Some(1));
        assert_eq!(Operator::from_char('('), None);
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
    }
}
