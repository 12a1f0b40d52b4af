pub mod builtins;
pub mod interpreter;

use std::io;

use crate::object::Object;

pub use builtins::{Arity, BuiltinId, call_builtin, lookup_builtin};
pub use interpreter::Interpreter;

/// Capabilities the evaluator lends to builtins while they run.
///
/// `map` and `filter` re-enter function application through `apply`, and
/// `print` writes to `diagnostics`. Tests substitute their own host to
/// observe both.
pub trait Host {
    /// Apply a callable to an already evaluated argument list.
    ///
    /// Total: failures are returned as `Object::Error`.
    fn apply(&mut self, function: &Object, args: Vec<Object>) -> Object;

    /// Stream `print` renders to
    fn diagnostics(&mut self) -> &mut dyn io::Write;
}
