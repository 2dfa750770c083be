//! Runtime values for the Monkey evaluator.
//!
//! This module defines the tagged set of values evaluation produces, the
//! lexically-scoped environment chain, and the wrapper for built-in
//! functions.
//!
//! # Module Structure
//!
//! - [`value`] - The [`Value`] enum, type tags, and canonical printing
//! - [`environment`] - The [`Environment`] chain with shared ownership
//! - [`builtin`] - The [`Builtin`] native-function wrapper
//!
//! # See Also
//!
//! * [`crate::evaluator`] - Produces and consumes these values

mod builtin;
mod environment;
mod value;

pub use builtin::{Builtin, BuiltinError, BuiltinFn};
pub use environment::{Env, Environment};
pub use value::{FALSE, Function, NULL, TRUE, Value, ValueType};
