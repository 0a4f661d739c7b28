
use yardcalc::{EvaluationError, Parser as ExprParser};
use yardcalc::parsing::token::display_rpn;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use std::io::{self, BufRead};
use std::process::ExitCode;

/// Evaluates infix arithmetic expressions built from numbers, the
/// operators + - * / %, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Print the postfix (RPN) translation instead of the value.
  #[arg(long)]
  rpn: bool,

  /// Print one JSON object per expression.
  #[arg(long)]
  json: bool,

  /// The expression to evaluate. If omitted, expressions are read
  /// from standard input, one per line.
  expression: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
  env_logger::init();
  let args = Args::parse();
  let parser = ExprParser::new();

  if !args.expression.is_empty() {
    let expression = args.expression.join(" ");
    return Ok(if run_one(&parser, &args, &expression) { ExitCode::SUCCESS } else { ExitCode::FAILURE });
  }

  let all_ok = run_lines(&parser, &args, io::stdin().lock())?;
  Ok(if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Evaluates every non-blank line of `input`, continuing past
/// failures. Returns false if any line failed.
fn run_lines(parser: &ExprParser, args: &Args, input: impl BufRead) -> anyhow::Result<bool> {
  let mut all_ok = true;
  for line in input.lines() {
    let line = line.context("failed to read from standard input")?;
    let expression = line.trim();
    if expression.is_empty() {
      continue;
    }
    all_ok &= run_one(parser, args, expression);
  }
  Ok(all_ok)
}

/// Evaluates and prints one expression. Returns false on failure.
fn run_one(parser: &ExprParser, args: &Args, expression: &str) -> bool {
  match render(parser, args, expression) {
    Ok(output) => {
      println!("{output}");
      true
    }
    Err(err) => {
      if args.json {
        println!("{}", error_json(expression, &err));
      } else {
        eprintln!("error: {err}");
      }
      false
    }
  }
}

fn render(parser: &ExprParser, args: &Args, expression: &str) -> Result<String, EvaluationError> {
  if args.rpn {
    let rpn = parser.to_rpn(expression)?;
    if args.json {
      Ok(json!({ "expression": expression, "rpn": rpn }).to_string())
    } else {
      Ok(display_rpn(&rpn).to_string())
    }
  } else {
    let value = parser.evaluate(expression)?;
    if args.json {
      Ok(json!({ "expression": expression, "result": value }).to_string())
    } else {
      Ok(value.to_string())
    }
  }
}

fn error_json(expression: &str, err: &EvaluationError) -> serde_json::Value {
  json!({
    "expression": expression,
    "error": err.to_string(),
    "kind": err.kind().to_string(),
  })
}
