
//! Stack evaluation of postfix token sequences.

use crate::error::ErrorKind;
use crate::parsing::operator::ArithmeticError;
use crate::parsing::source::Span;
use crate::parsing::token::{Token, TokenData, TokenKind};

use log::trace;
use thiserror::Error;

/// Folds a sequence of tokens in Reverse Polish Notation into a
/// single number.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Not enough operands for '{operator}' at {span}, expected 2 but found {actual}")]
  NotEnoughOperands {
    operator: String,
    span: Span,
    actual: usize,
  },
  #[error("Expected exactly one value after evaluation, but found {0}")]
  WrongResultCount(usize),
  #[error("Invalid operand '{0}'")]
  InvalidOperand(String),
  #[error("Operand '{0}' is out of range")]
  OperandOutOfRange(String),
  #[error("Unexpected {0} in postfix expression")]
  UnexpectedToken(TokenKind),
  #[error(transparent)]
  Arithmetic(#[from] ArithmeticError),
  #[error("Unknown operator '{0}'")]
  UnknownOperator(String),
}

impl Evaluator {
  pub fn new() -> Self {
    Evaluator
  }

  pub fn fold(&self, rpn: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();
    for token in rpn {
      match token.data() {
        TokenData::Operand(text) => {
          let value = text.parse::<f64>().map_err(|_| EvalError::InvalidOperand(text.to_owned()))?;
          if !value.is_finite() {
            return Err(EvalError::OperandOutOfRange(text.to_owned()));
          }
          stack.push(value);
        }
        TokenData::Operator(op) => {
          let available = stack.len();
          let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(EvalError::NotEnoughOperands {
              operator: op.symbol().to_owned(),
              span: token.span(),
              actual: available,
            });
          };
          let arith = op.as_arithmetic()
            .ok_or_else(|| EvalError::UnknownOperator(op.symbol().to_owned()))?;
          let value = arith.apply(left, right)?;
          trace!("evaluator: {} {} {} = {}", left, arith, right, value);
          stack.push(value);
        }
        TokenData::LeftBracket | TokenData::RightBracket => {
          return Err(EvalError::UnexpectedToken(token.kind()));
        }
      }
    }
    match stack.as_slice() {
      [value] => Ok(*value),
      _ => Err(EvalError::WrongResultCount(stack.len())),
    }
  }
}

impl EvalError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      EvalError::NotEnoughOperands { .. } => ErrorKind::MalformedExpression,
      EvalError::WrongResultCount(_) => ErrorKind::MalformedExpression,
      EvalError::InvalidOperand(_) => ErrorKind::MalformedExpression,
      EvalError::UnexpectedToken(_) => ErrorKind::MalformedExpression,
      EvalError::OperandOutOfRange(_) => ErrorKind::Overflow,
      EvalError::Arithmetic(ArithmeticError::DivisionByZero(_)) => ErrorKind::DivisionByZero,
      EvalError::Arithmetic(ArithmeticError::Overflow(_)) => ErrorKind::Overflow,
      EvalError::UnknownOperator(_) => ErrorKind::UnknownOperator,
    }
  }
}
