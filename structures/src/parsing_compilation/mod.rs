pub mod calculator;

pub use calculator::{evaluate, ExpressionCalculator, Operator};
