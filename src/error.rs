
use crate::evaluator::EvalError;
use crate::parsing::lexer::LexicalError;
use crate::parsing::shunting_yard::MismatchedParenthesesError;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// Any failure of [`Parser::evaluate`](crate::parser::Parser::evaluate).
/// Each variant carries the error of the stage that failed, unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EvaluationError {
  #[error(transparent)]
  Lexical(#[from] LexicalError),
  #[error(transparent)]
  MismatchedParentheses(#[from] MismatchedParenthesesError),
  #[error(transparent)]
  Eval(#[from] EvalError),
}

/// Coarse classification of an [`EvaluationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Lexical,
  MismatchedParentheses,
  MalformedExpression,
  DivisionByZero,
  /// An operand or intermediate result does not fit in a finite `f64`.
  Overflow,
  /// An operator reached the evaluator without an arithmetic
  /// definition. Indicates a bug, not bad input.
  UnknownOperator,
}

impl EvaluationError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      EvaluationError::Lexical(_) => ErrorKind::Lexical,
      EvaluationError::MismatchedParentheses(_) => ErrorKind::MismatchedParentheses,
      EvaluationError::Eval(err) => err.kind(),
    }
  }

  /// Whether the error was caused by the input expression, as opposed
  /// to an inconsistency inside the pipeline.
  pub fn is_user_error(&self) -> bool {
    self.kind() != ErrorKind::UnknownOperator
  }
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      ErrorKind::Lexical => "lexical error",
      ErrorKind::MismatchedParentheses => "mismatched parentheses",
      ErrorKind::MalformedExpression => "malformed expression",
      ErrorKind::DivisionByZero => "division by zero",
      ErrorKind::Overflow => "out of range",
      ErrorKind::UnknownOperator => "unknown operator",
    };
    write!(f, "{name}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::{ArithmeticError, ArithmeticOp};
  use crate::parsing::source::{SourceOffset, Span};

  #[test]
  fn test_messages_pass_through() {
    let inner = LexicalError::UnexpectedChar('a', SourceOffset(4));
    let err = EvaluationError::from(inner.clone());
    assert_eq!(err.to_string(), inner.to_string());

    let inner = MismatchedParenthesesError::UnclosedLeft(Span::single(SourceOffset(0)));
    let err = EvaluationError::from(inner);
    assert_eq!(err.to_string(), "Unclosed '(' at position 0-1");
  }

  #[test]
  fn test_kinds() {
    let err = EvaluationError::from(EvalError::WrongResultCount(2));
    assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    assert!(err.is_user_error());

    let err = EvaluationError::from(EvalError::from(ArithmeticError::DivisionByZero(ArithmeticOp::Modulo)));
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero in '%'");

    let err = EvaluationError::from(EvalError::from(ArithmeticError::Overflow(ArithmeticOp::Add)));
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "Result of '+' is out of range");

    let err = EvaluationError::from(EvalError::UnknownOperator(String::from("^")));
    assert_eq!(err.kind(), ErrorKind::UnknownOperator);
    assert!(!err.is_user_error());
  }
}
