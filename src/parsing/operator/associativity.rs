
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// Indicates an operator which associates to the left.
  Left,
  /// Indicates an operator which associates to the right.
  Right,
  /// Indicates a non-associative operator, which always requires
  /// parentheses for nested applications of itself.
  None,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid associativity '{0}', expected one of 'left', 'right', or 'none'")]
pub struct InvalidAssociativityError(pub String);

impl Associativity {
  pub const fn is_left_assoc(self) -> bool {
    matches!(self, Associativity::Left)
  }
  pub const fn is_right_assoc(self) -> bool {
    matches!(self, Associativity::Right)
  }
  pub const fn is_non_assoc(self) -> bool {
    matches!(self, Associativity::None)
  }
}

impl FromStr for Associativity {
  type Err = InvalidAssociativityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "left" => Ok(Associativity::Left),
      "right" => Ok(Associativity::Right),
      "none" => Ok(Associativity::None),
      _ => Err(InvalidAssociativityError(s.to_owned())),
    }
  }
}

impl Display for Associativity {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      Associativity::Left => "left",
      Associativity::Right => "right",
      Associativity::None => "none",
    };
    write!(f, "{}", name)
  }
}
