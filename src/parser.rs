
//! The public entry point: text in, number out.

use crate::error::EvaluationError;
use crate::evaluator::Evaluator;
use crate::parsing::lexer::Lexer;
use crate::parsing::shunting_yard::{ShuntingYard, TranslationStrategy};
use crate::parsing::token::{display_rpn, Token};

use log::debug;

/// Runs an expression through the lexer, the translation strategy,
/// and the evaluator. Holds no state between calls, so one `Parser`
/// may serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Parser<S = ShuntingYard> {
  lexer: Lexer,
  strategy: S,
  evaluator: Evaluator,
}

impl Parser {
  pub fn new() -> Self {
    Parser::default()
  }
}

impl<S: TranslationStrategy> Parser<S> {
  pub fn with_strategy(strategy: S) -> Self {
    Parser {
      lexer: Lexer::new(),
      strategy,
      evaluator: Evaluator::new(),
    }
  }

  /// Tokenizes `expression` and translates it to postfix order,
  /// without evaluating.
  pub fn to_rpn(&self, expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let tokens = self.lexer.tokenize(expression)?;
    debug!("lexed {:?} into {} tokens", expression, tokens.len());
    let rpn = self.strategy.translate(tokens)?;
    debug!("translated {:?} to RPN: {}", expression, display_rpn(&rpn));
    Ok(rpn)
  }

  pub fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
    let rpn = self.to_rpn(expression)?;
    let value = self.evaluator.fold(&rpn)?;
    debug!("evaluated {:?} to {}", expression, value);
    Ok(value)
  }
}

/// Evaluates `expression` with the default shunting yard parser.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
  Parser::new().evaluate(expression)
}
