use std::fmt;
use std::rc::Rc;

use super::environment::Environment;
use super::value::Object;
use crate::evaluator::Host;

/// Executable body of a closure.
///
/// Receives the scope holding the bound parameters and the host, so a body
/// can itself call builtins or apply other functions.
pub type Body = Rc<dyn Fn(&Environment, &mut dyn Host) -> Object>;

/// Closure wraps its parameters and body with the environment it was defined in
pub struct Function {
    pub parameters: Vec<String>,
    pub body: Body,
    pub env: Environment,
}

impl Function {
    pub fn new<I, S, F>(parameters: I, env: Environment, body: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Environment, &mut dyn Host) -> Object + 'static,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Rc::new(body),
            env,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
