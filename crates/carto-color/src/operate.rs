//! Scalar arithmetic operators used in stylesheet expressions.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Op {
    /// Applies the operator to two scalars.
    ///
    /// Division by zero follows IEEE-754 and yields an infinity or NaN.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
            Op::Rem => a % b,
        }
    }

    /// Returns the operator's symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Op {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            "%" => Ok(Op::Rem),
            other => Err(ColorError::UnknownOperator {
                symbol: other.to_string(),
            }),
        }
    }
}

/// Applies `op` to two scalars. Equivalent to [`Op::apply`].
pub fn operate(op: Op, a: f64, b: f64) -> f64 {
    op.apply(a, b)
}
