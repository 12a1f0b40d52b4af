use crate::object::{Object, ObjectType};
use std::fmt;

/// Reasons a builtin (or the host applying a callable) rejects its arguments.
///
/// These never escape to the host process: `call_builtin` converts them into
/// `Object::Error` values, which user programs observe like any other result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    /// Wrong argument count for a fixed-arity callable
    Arity { got: usize, want: usize },
    /// Positional argument of the wrong kind
    ArgumentType {
        builtin: &'static str,
        expected: ObjectType,
        got: ObjectType,
    },
    /// Argument outside a union of accepted kinds (`len`)
    Unsupported {
        builtin: &'static str,
        got: ObjectType,
    },
    /// Application of a value that is neither a closure nor a builtin
    NotCallable { got: ObjectType },
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinError::Arity { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            }
            BuiltinError::ArgumentType {
                builtin,
                expected,
                got,
            } => write!(f, "argument to `{builtin}` must be {expected}, got {got}"),
            BuiltinError::Unsupported { builtin, got } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            }
            BuiltinError::NotCallable { got } => write!(f, "not a function: {got}"),
        }
    }
}

impl std::error::Error for BuiltinError {}

impl From<BuiltinError> for Object {
    fn from(err: BuiltinError) -> Self {
        Object::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_error_display() {
        let err = BuiltinError::Arity { got: 3, want: 1 };

        assert_eq!(err.to_string(), "wrong number of arguments. got=3, want=1");
    }

    #[test]
    fn argument_type_error_display() {
        let err = BuiltinError::ArgumentType {
            builtin: "first",
            expected: ObjectType::Array,
            got: ObjectType::Integer,
        };

        assert_eq!(
            err.to_string(),
            "argument to `first` must be ARRAY, got INTEGER"
        );
    }

    #[test]
    fn unsupported_error_display() {
        let err = BuiltinError::Unsupported {
            builtin: "len",
            got: ObjectType::Function,
        };

        assert_eq!(err.to_string(), "argument to `len` not supported, got FUNCTION");
    }

    #[test]
    fn not_callable_error_display() {
        let err = BuiltinError::NotCallable {
            got: ObjectType::Integer,
        };

        assert_eq!(err.to_string(), "not a function: INTEGER");
    }

    #[test]
    fn converts_into_error_value() {
        let value: Object = BuiltinError::Arity { got: 0, want: 2 }.into();

        assert_eq!(
            value,
            Object::error("wrong number of arguments. got=0, want=2")
        );
        assert_eq!(value.object_type(), ObjectType::Error);
    }
}
