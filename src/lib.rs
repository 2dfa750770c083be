//! The Monk interpreter library.
//!
//! This library provides the core components of the Monk interpreter, a
//! tree-walking implementation of the Monkey language: lexical analysis,
//! parsing, and evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Pratt parser producing the AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`object`] - Runtime values and the environment chain
//! - [`evaluator`] - The tree walker
//!
//! # Example
//!
//! ```
//! use monk::evaluator::evaluate;
//! use monk::lexer::Lexer;
//! use monk::object::{Environment, Value};
//! use monk::parser::Parser;
//!
//! // Source code to run
//! let source = "let double = fn(x) { x * 2; }; double(21);";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize();
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("Parse error");
//!
//! // Evaluation
//! let env = Environment::new();
//! let result = evaluate(&program, &env).expect("Evaluation error");
//! assert_eq!(result, Value::Integer(42));
//! ```

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;
