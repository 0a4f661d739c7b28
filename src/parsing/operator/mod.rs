
mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::{Associativity, InvalidAssociativityError};
pub use table::{ArithmeticOp, ArithmeticError};

use std::fmt::{self, Display, Formatter};

/// An infix operator has a precedence and an associativity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
  symbol: String,
  assoc: Associativity,
  prec: Precedence,
  arith: Option<ArithmeticOp>,
}

impl Operator {
  /// Constructs a new operator with the given properties. The
  /// built-in arithmetic operator with the same symbol, if any, is
  /// resolved here once.
  pub fn new(symbol: impl Into<String>, assoc: Associativity, prec: Precedence) -> Self {
    let symbol = symbol.into();
    let arith = ArithmeticOp::from_symbol(&symbol);
    Operator { symbol, assoc, prec, arith }
  }

  pub(crate) fn builtin(op: ArithmeticOp) -> Self {
    Operator {
      symbol: op.symbol().to_owned(),
      assoc: op.associativity(),
      prec: op.precedence(),
      arith: Some(op),
    }
  }

  /// The name of the operator, as written in the source.
  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// Whether an operator `other` already on the shunting yard stack
  /// must be applied before `self`.
  ///
  /// This is the only precedence and associativity decision in the
  /// pipeline. Equal precedence pops only when `other` is
  /// left-associative.
  pub fn has_lower_priority_than(&self, other: &Operator) -> bool {
    (other.assoc.is_left_assoc() && self.prec == other.prec) || self.prec < other.prec
  }

  /// The built-in arithmetic operator with this symbol, if any.
  pub fn as_arithmetic(&self) -> Option<ArithmeticOp> {
    self.arith
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn op(symbol: &str, assoc: Associativity, prec: u32) -> Operator {
    Operator::new(symbol, assoc, Precedence::new(prec))
  }

  #[test]
  fn test_lower_priority_by_precedence() {
    let plus = op("+", Associativity::Left, 1);
    let times = op("*", Associativity::Left, 2);
    assert!(plus.has_lower_priority_than(&times));
    assert!(!times.has_lower_priority_than(&plus));
  }

  #[test]
  fn test_equal_precedence_left_assoc() {
    let plus = op("+", Associativity::Left, 1);
    let minus = op("-", Associativity::Left, 1);
    assert!(plus.has_lower_priority_than(&minus));
    assert!(minus.has_lower_priority_than(&plus));
    assert!(minus.has_lower_priority_than(&minus));
  }

  #[test]
  fn test_equal_precedence_right_assoc() {
    let pow = op("^", Associativity::Right, 3);
    assert!(!pow.has_lower_priority_than(&pow));
  }

  #[test]
  fn test_equal_precedence_non_assoc() {
    let cmp = op("<", Associativity::None, 0);
    assert!(!cmp.has_lower_priority_than(&cmp));
  }

  #[test]
  fn test_associativity_of_other_decides() {
    let left = op("+", Associativity::Left, 1);
    let right = op("#", Associativity::Right, 1);
    assert!(right.has_lower_priority_than(&left));
    assert!(!left.has_lower_priority_than(&right));
  }

  #[test]
  fn test_as_arithmetic() {
    assert_eq!(op("%", Associativity::Left, 2).as_arithmetic(), Some(ArithmeticOp::Modulo));
    assert_eq!(op("^", Associativity::Right, 3).as_arithmetic(), None);
  }

  #[test]
  fn test_builtin_agrees_with_new() {
    for arith in ArithmeticOp::ALL {
      let built = Operator::from(arith);
      let spelled = Operator::new(arith.symbol(), arith.associativity(), arith.precedence());
      assert_eq!(built, spelled);
      assert_eq!(built.as_arithmetic(), Some(arith));
    }
  }
}
