
//! An infix arithmetic evaluator.
//!
//! Expressions are tokenized by the [lexer](parsing::lexer),
//! reordered into Reverse Polish Notation by the [shunting
//! yard](parsing::shunting_yard), and folded into an `f64` by the
//! [evaluator](evaluator).
//!
//! ```
//! assert_eq!(yardcalc::evaluate("(3 + 4) * 2").unwrap(), 14.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod parsing;

pub use error::{ErrorKind, EvaluationError};
pub use parser::{evaluate, Parser};
