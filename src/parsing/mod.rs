
//! Lexing and infix-to-postfix translation of arithmetic expressions.

pub mod lexer;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;
