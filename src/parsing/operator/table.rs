
//! The fixed table of arithmetic operators understood by the
//! evaluator.

use super::Operator;
use super::precedence::Precedence;
use super::associativity::Associativity;

use phf::phf_map;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// One of the five built-in binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
  Add,
  Subtract,
  Multiply,
  Divide,
  Modulo,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("Division by zero in '{0}'")]
  DivisionByZero(ArithmeticOp),
  #[error("Result of '{0}' is out of range")]
  Overflow(ArithmeticOp),
}

static OPERATORS: phf::Map<&'static str, ArithmeticOp> = phf_map! {
  "+" => ArithmeticOp::Add,
  "-" => ArithmeticOp::Subtract,
  "*" => ArithmeticOp::Multiply,
  "/" => ArithmeticOp::Divide,
  "%" => ArithmeticOp::Modulo,
};

impl ArithmeticOp {
  pub const ALL: [ArithmeticOp; 5] = [
    ArithmeticOp::Add,
    ArithmeticOp::Subtract,
    ArithmeticOp::Multiply,
    ArithmeticOp::Divide,
    ArithmeticOp::Modulo,
  ];

  /// Looks up the operator with the given symbol in the built-in
  /// table.
  pub fn from_symbol(symbol: &str) -> Option<ArithmeticOp> {
    OPERATORS.get(symbol).copied()
  }

  pub const fn symbol(self) -> &'static str {
    match self {
      ArithmeticOp::Add => "+",
      ArithmeticOp::Subtract => "-",
      ArithmeticOp::Multiply => "*",
      ArithmeticOp::Divide => "/",
      ArithmeticOp::Modulo => "%",
    }
  }

  pub const fn precedence(self) -> Precedence {
    match self {
      ArithmeticOp::Add | ArithmeticOp::Subtract => Precedence::new(1),
      ArithmeticOp::Multiply | ArithmeticOp::Divide | ArithmeticOp::Modulo => Precedence::new(2),
    }
  }

  pub const fn associativity(self) -> Associativity {
    Associativity::Left
  }

  /// Applies the operator to its two arguments.
  ///
  /// Modulo truncates both arguments toward zero and takes the
  /// remainder, whose sign follows `left`. A result that does not fit
  /// in a finite `f64` is an [`ArithmeticError::Overflow`].
  pub fn apply(self, left: f64, right: f64) -> Result<f64, ArithmeticError> {
    let result = match self {
      ArithmeticOp::Add => left + right,
      ArithmeticOp::Subtract => left - right,
      ArithmeticOp::Multiply => left * right,
      ArithmeticOp::Divide => {
        if right == 0.0 {
          return Err(ArithmeticError::DivisionByZero(self));
        }
        left / right
      }
      ArithmeticOp::Modulo => {
        // Stay in f64; integers above 2^63 are still exact here.
        let (left, right) = (left.trunc(), right.trunc());
        if right == 0.0 {
          return Err(ArithmeticError::DivisionByZero(self));
        }
        left % right
      }
    };
    if result.is_finite() {
      Ok(result)
    } else {
      Err(ArithmeticError::Overflow(self))
    }
  }
}

impl From<ArithmeticOp> for Operator {
  fn from(op: ArithmeticOp) -> Operator {
    Operator::builtin(op)
  }
}

impl Display for ArithmeticOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
