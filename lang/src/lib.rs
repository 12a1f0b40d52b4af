//! Native builtin layer of the Monkey tree-walking evaluator.
//!
//! The evaluator resolves an identifier with [`evaluator::lookup_builtin`]
//! and invokes the result with [`evaluator::call_builtin`], handing over a
//! [`evaluator::Host`] that builtins such as `map` and `filter` use to apply
//! user closures.

pub mod error;
pub mod evaluator;
pub mod object;

pub use error::BuiltinError;
pub use evaluator::{Host, Interpreter, call_builtin, lookup_builtin};
pub use object::{Environment, Function, Object, ObjectType};
