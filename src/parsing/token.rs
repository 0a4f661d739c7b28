
use super::operator::Operator;
use super::source::Span;

use itertools::Itertools;
use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  data: TokenData,
  span: Span,
}

/// The contents of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  /// A numeric literal, stored as written.
  Operand(String),
  /// An infix, binary operator.
  Operator(Operator),
  LeftBracket,
  RightBracket,
}

/// The classification of a token, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
  Operand,
  Operator,
  LeftBracket,
  RightBracket,
}

/// Displays a token sequence separated by spaces, the usual way of
/// writing RPN.
#[derive(Debug, Clone, Copy)]
pub struct RpnDisplay<'a>(&'a [Token]);

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  pub fn operand(value: impl Into<String>, span: Span) -> Self {
    Self::new(TokenData::Operand(value.into()), span)
  }

  pub fn operator(op: Operator, span: Span) -> Self {
    Self::new(TokenData::Operator(op), span)
  }

  pub fn left_bracket(span: Span) -> Self {
    Self::new(TokenData::LeftBracket, span)
  }

  pub fn right_bracket(span: Span) -> Self {
    Self::new(TokenData::RightBracket, span)
  }

  pub fn data(&self) -> &TokenData {
    &self.data
  }

  /// The literal text of this token.
  pub fn value(&self) -> &str {
    match &self.data {
      TokenData::Operand(s) => s,
      TokenData::Operator(op) => op.symbol(),
      TokenData::LeftBracket => "(",
      TokenData::RightBracket => ")",
    }
  }

  pub fn kind(&self) -> TokenKind {
    self.data.kind()
  }

  pub fn span(&self) -> Span {
    self.span
  }

  pub fn as_operator(&self) -> Option<&Operator> {
    match &self.data {
      TokenData::Operator(op) => Some(op),
      _ => None,
    }
  }
}

impl TokenData {
  pub fn kind(&self) -> TokenKind {
    match self {
      TokenData::Operand(_) => TokenKind::Operand,
      TokenData::Operator(_) => TokenKind::Operator,
      TokenData::LeftBracket => TokenKind::LeftBracket,
      TokenData::RightBracket => TokenKind::RightBracket,
    }
  }
}

/// Wraps `tokens` for display as a space-separated sequence.
pub fn display_rpn(tokens: &[Token]) -> RpnDisplay<'_> {
  RpnDisplay(tokens)
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value())
  }
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenKind::Operand => write!(f, "operand"),
      TokenKind::Operator => write!(f, "operator"),
      TokenKind::LeftBracket => write!(f, "left bracket"),
      TokenKind::RightBracket => write!(f, "right bracket"),
    }
  }
}

impl Display for RpnDisplay<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.iter().join(" "))
  }
}

impl Serialize for Token {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Token", 3)?;
    state.serialize_field("value", self.value())?;
    state.serialize_field("kind", &self.kind())?;
    state.serialize_field("span", &self.span)?;
    state.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::ArithmeticOp;
  use crate::parsing::source::SourceOffset;

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  #[test]
  fn test_value_and_kind() {
    let token = Token::operand("12.5", span(0, 4));
    assert_eq!(token.value(), "12.5");
    assert_eq!(token.kind(), TokenKind::Operand);
    assert!(token.as_operator().is_none());

    let token = Token::operator(ArithmeticOp::Modulo.into(), span(5, 6));
    assert_eq!(token.value(), "%");
    assert_eq!(token.kind(), TokenKind::Operator);
    assert_eq!(token.as_operator().unwrap().as_arithmetic(), Some(ArithmeticOp::Modulo));

    assert_eq!(Token::left_bracket(span(0, 1)).value(), "(");
    assert_eq!(Token::right_bracket(span(0, 1)).kind(), TokenKind::RightBracket);
  }

  #[test]
  fn test_display_rpn() {
    let tokens = vec![
      Token::operand("2", span(0, 1)),
      Token::operand("3", span(4, 5)),
      Token::operator(ArithmeticOp::Add.into(), span(2, 3)),
    ];
    assert_eq!(display_rpn(&tokens).to_string(), "2 3 +");
    assert_eq!(display_rpn(&[]).to_string(), "");
  }

  #[test]
  fn test_serialize_token() {
    let token = Token::operator(ArithmeticOp::Multiply.into(), span(2, 3));
    let json = serde_json::to_value(&token).unwrap();
    assert_eq!(json, serde_json::json!({
      "value": "*",
      "kind": "operator",
      "span": { "start": 2, "end": 3 },
    }));
  }
}
