use std::io::{self, Write};

use super::Host;
use super::builtins::call_builtin;
use crate::error::BuiltinError;
use crate::object::{Function, Object};

/// Reference host: applies closures and builtins, prints to `output`
pub struct Interpreter<W: Write = io::Stderr> {
    output: W,
}

impl Interpreter {
    /// Interpreter printing diagnostics to stderr, keeping stdout for program output
    pub fn new() -> Self {
        Self::with_output(io::stderr())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn apply_function(&mut self, function: &Function, args: Vec<Object>) -> Object {
        if args.len() != function.arity() {
            return BuiltinError::Arity {
                got: args.len(),
                want: function.arity(),
            }
            .into();
        }

        let env = function.env.enclosed();
        for (name, arg) in function.parameters.iter().zip(args) {
            env.set(name.as_str(), arg);
        }

        (function.body)(&env, self)
    }
}

impl<W: Write> Host for Interpreter<W> {
    fn apply(&mut self, function: &Object, args: Vec<Object>) -> Object {
        tracing::trace!(callee = %function.object_type(), argc = args.len(), "applying");

        match function {
            Object::Function(closure) => self.apply_function(closure, args),
            Object::Builtin(id) => call_builtin(*id, &args, self),
            other => BuiltinError::NotCallable {
                got: other.object_type(),
            }
            .into(),
        }
    }

    fn diagnostics(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
