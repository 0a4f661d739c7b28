
use super::operator::ArithmeticOp;
use super::source::SourceOffset;
use super::token::Token;
use super::tokenizer::TokenizerState;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

/// Splits an arithmetic expression into [`Token`]s.
///
/// Numbers are unsigned decimals with at most one decimal point
/// (`12`, `12.5`, `.5`, `5.`). The lexer holds no state between
/// calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexer;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexicalError {
  #[error("Unexpected character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Unexpected character '.' at {0}, numbers may contain at most one decimal point")]
  RepeatedDecimalPoint(SourceOffset),
}

impl Lexer {
  pub fn new() -> Self {
    Lexer
  }

  /// Reads every token in `input`, in source order. Whitespace-only
  /// input produces an empty vector.
  pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexicalError> {
    let mut state = TokenizerState::new(input);
    let mut tokens = Vec::new();
    state.consume_spaces();
    while let Some(token) = self.read_one_token(&mut state) {
      tokens.push(token?);
      state.consume_spaces();
    }
    Ok(tokens)
  }

  /// Reads the next token, or `None` once the input is exhausted.
  fn read_one_token(&self, state: &mut TokenizerState<'_>) -> Option<Result<Token, LexicalError>> {
    let ch = state.peek()?;
    let res = if let Some(tok) = self.read_bracket(state) {
      Ok(tok)
    } else if let Some(res) = self.read_number_literal(state) {
      res
    } else if let Some(tok) = self.read_operator(state) {
      Ok(tok)
    } else {
      Err(LexicalError::UnexpectedChar(ch, state.current_pos()))
    };
    Some(res)
  }

  fn read_bracket(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    if let Some(m) = state.read_literal("(") {
      Some(Token::left_bracket(m.span()))
    } else {
      state.read_literal(")").map(|m| Token::right_bracket(m.span()))
    }
  }

  fn read_operator(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    let mut buf = [0; 4];
    let op = ArithmeticOp::from_symbol(state.peek()?.encode_utf8(&mut buf))?;
    let m = state.read_char()?;
    Some(Token::operator(op.into(), m.span()))
  }

  fn read_number_literal(&self, state: &mut TokenizerState<'_>) -> Option<Result<Token, LexicalError>> {
    static RE: Lazy<Regex> = Lazy::new(|| {
      Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap()
    });
    let m = state.read_regex(&RE)?;
    if state.peek() == Some('.') {
      return Some(Err(LexicalError::RepeatedDecimalPoint(state.current_pos())));
    }
    Some(Ok(Token::operand(m.as_str(), m.span())))
  }
}

impl LexicalError {
  /// The character which could not be scanned.
  pub fn offending_char(&self) -> char {
    match self {
      LexicalError::UnexpectedChar(ch, _) => *ch,
      LexicalError::RepeatedDecimalPoint(_) => '.',
    }
  }

  pub fn position(&self) -> SourceOffset {
    match self {
      LexicalError::UnexpectedChar(_, pos) => *pos,
      LexicalError::RepeatedDecimalPoint(pos) => *pos,
    }
  }
}
