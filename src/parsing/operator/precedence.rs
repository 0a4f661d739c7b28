
use std::fmt::{self, Display, Formatter};

/// The priority of an operator. Higher values bind tighter. Only the
/// relative order of precedence values is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Precedence(u32);

impl Precedence {
  pub const fn new(n: u32) -> Precedence {
    Precedence(n)
  }

  pub const fn get(self) -> u32 {
    self.0
  }
}

impl From<u32> for Precedence {
  fn from(n: u32) -> Precedence {
    Precedence::new(n)
  }
}

impl Display for Precedence {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
