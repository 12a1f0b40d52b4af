use im_rc::Vector;
use std::fmt;
use std::rc::Rc;

use super::function::Function;
use crate::evaluator::builtins::BuiltinId;

/// Runtime value of the Monkey evaluator
#[derive(Clone, Debug)]
pub enum Object {
    /// Absence of a value
    Null,

    /// 64-bit signed integer
    Integer(i64),

    Boolean(bool),

    /// UTF-8 string
    String(Rc<str>),

    /// Ordered, persistent sequence; updates share structure with the original
    Array(Vector<Object>),

    /// User closure
    Function(Rc<Function>),

    /// Native function from the builtin registry
    Builtin(BuiltinId),

    /// Error raised by the program, carried as an ordinary value
    Error(Rc<str>),
}

/// Type tag of an `Object`, as shown in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Null,
    Integer,
    Boolean,
    String,
    Array,
    Function,
    Builtin,
    Error,
}

impl ObjectType {
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Null => "NULL",
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::String => "STRING",
            ObjectType::Array => "ARRAY",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Error => "ERROR",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Object {
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::String(value.into())
    }

    pub fn array(elements: impl IntoIterator<Item = Object>) -> Self {
        Object::Array(elements.into_iter().collect())
    }

    pub fn error(message: impl Into<Rc<str>>) -> Self {
        Object::Error(message.into())
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Null => ObjectType::Null,
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::String(_) => ObjectType::String,
            Object::Array(_) => ObjectType::Array,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Error(_) => ObjectType::Error,
        }
    }

    /// Only `null` and `false` are falsy; `0`, `""` and `[]` are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Null => false,
            Object::Boolean(b) => *b,
            Object::Integer(_)
            | Object::String(_)
            | Object::Array(_)
            | Object::Function(_)
            | Object::Builtin(_)
            | Object::Error(_) => true,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}

/// Structural equality for data; callables compare by identity
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Null, Object::Null) => true,
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Object {}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Integer(n) => write!(f, "{n}"),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::String(s) => write!(f, "{s}"),
            Object::Array(elements) => {
                write!(f, "[")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "]")
            }
            Object::Function(function) => {
                write!(f, "fn({}) {{ ... }}", function.parameters.join(", "))
            }
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
