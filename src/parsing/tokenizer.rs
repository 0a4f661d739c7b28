
//! Cursor over an input string, used by the [lexer](super::lexer).

use super::source::{SourceOffset, Span};

use regex::Regex;
use once_cell::sync::Lazy;

/// Read position within an expression string. The cursor only moves
/// forward.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// A substring consumed from a [`TokenizerState`], together with its
/// position in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes and returns
  /// the skipped portion. Never advances beyond the end of the input.
  ///
  /// `amount` must land on a character boundary.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// Consumes exactly one character, whatever it is.
  pub fn read_char(&mut self) -> Option<TokenizerMatch<'a>> {
    let ch = self.peek()?;
    Some(self.advance(ch.len_utf8()))
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    if self.input.starts_with(literal) {
      Some(self.advance(literal.len()))
    } else {
      None
    }
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());
    self.read_regex(&RE).expect("regex should not fail");
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_peek_at_end() {
    let state = TokenizerState::new("");
    assert_eq!(state.peek(), None);

    let mut state = TokenizerState::new("1+2");
    state.advance(2);
    assert_eq!(state.peek(), Some('2'));
    state.advance(99);
    assert_eq!(state.peek(), None);
  }

  #[test]
  fn test_advance_positions() {
    let mut state = TokenizerState::new("12 + 345");

    let m = state.advance(2);
    assert_eq!(m.as_str(), "12");
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(2)));

    let m = state.advance(99);
    assert_eq!(m.as_str(), " + 345");
    assert_eq!(m.span(), Span::new(SourceOffset(2), SourceOffset(8)));
    assert_eq!(state.peek(), None);

    let m = state.advance(1);
    assert_eq!(m.as_str(), "");
    assert_eq!(m.span(), Span::new(SourceOffset(8), SourceOffset(8)));
  }

  #[test]
  fn test_read_char_multibyte() {
    let mut state = TokenizerState::new("é1");
    let m = state.read_char().unwrap();
    assert_eq!(m.as_str(), "é");
    assert_eq!(state.current_pos(), SourceOffset(2));
    assert_eq!(state.peek(), Some('1'));
    state.read_char().unwrap();
    assert!(state.read_char().is_none());
  }

  #[test]
  fn test_read_literal() {
    let mut state = TokenizerState::new("(1)");
    assert!(state.read_literal(")").is_none());
    assert_eq!(state.current_pos(), SourceOffset(0));

    let m = state.read_literal("(").unwrap();
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(1)));
    assert_eq!(state.peek(), Some('1'));
  }

  #[test]
  fn test_read_regex() {
    let re = Regex::new(r"^[0-9]+").unwrap();
    let mut state = TokenizerState::new("123+4");

    let m = state.read_regex(&re).unwrap();
    assert_eq!(m.as_str(), "123");
    assert_eq!(state.current_pos(), SourceOffset(3));

    assert!(state.read_regex(&re).is_none());
    assert_eq!(state.current_pos(), SourceOffset(3));
  }

  #[test]
  fn test_consume_spaces() {
    let mut state = TokenizerState::new(" \t 1  2");
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));

    // No spaces here, so no effect.
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));
  }
}
