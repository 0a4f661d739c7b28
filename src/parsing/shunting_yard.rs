
//! Infix to postfix translation.

use super::source::Span;
use super::token::{Token, TokenData};

use log::trace;
use thiserror::Error;

/// A strategy for reordering an infix token sequence into Reverse
/// Polish Notation.
pub trait TranslationStrategy {
  fn translate(&self, tokens: Vec<Token>) -> Result<Vec<Token>, MismatchedParenthesesError>;
}

/// Dijkstra's shunting yard algorithm. Brackets are consumed and
/// never appear in the output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShuntingYard;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MismatchedParenthesesError {
  #[error("Unmatched ')' at position {0}")]
  UnmatchedRight(Span),
  #[error("Unclosed '(' at position {0}")]
  UnclosedLeft(Span),
}

impl ShuntingYard {
  pub fn new() -> Self {
    ShuntingYard
  }
}

impl TranslationStrategy for ShuntingYard {
  fn translate(&self, tokens: Vec<Token>) -> Result<Vec<Token>, MismatchedParenthesesError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut operator_stack: Vec<Token> = Vec::new();
    for token in tokens {
      match token.data() {
        TokenData::Operand(_) => {
          output.push(token);
        }
        TokenData::Operator(op) => {
          // Pop operators which must be applied before this one.
          while let Some(top) = operator_stack.last() {
            match top.as_operator() {
              Some(top_op) if op.has_lower_priority_than(top_op) => {
                trace!("shunting yard: popping {} before {}", top_op, op);
                output.extend(operator_stack.pop());
              }
              _ => break,
            }
          }
          operator_stack.push(token);
        }
        TokenData::LeftBracket => {
          operator_stack.push(token);
        }
        TokenData::RightBracket => {
          loop {
            match operator_stack.pop() {
              None => {
                return Err(MismatchedParenthesesError::UnmatchedRight(token.span()));
              }
              Some(top) if matches!(top.data(), TokenData::LeftBracket) => {
                break;
              }
              Some(top) => {
                output.push(top);
              }
            }
          }
        }
      }
    }

    // Pop and emit remaining operators.
    while let Some(top) = operator_stack.pop() {
      if top.as_operator().is_none() {
        return Err(MismatchedParenthesesError::UnclosedLeft(top.span()));
      }
      output.push(top);
    }
    Ok(output)
  }
}

impl MismatchedParenthesesError {
  pub fn span(&self) -> Span {
    match self {
      MismatchedParenthesesError::UnmatchedRight(span) => *span,
      MismatchedParenthesesError::UnclosedLeft(span) => *span,
    }
  }
}
