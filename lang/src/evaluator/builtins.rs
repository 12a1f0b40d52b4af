//! Built-in functions for Monkey
//!
//! The registry is a constant table: names resolve through
//! [`BuiltinId::from_name`], so it is fully initialised before first use,
//! never mutated, and safe to read from any number of evaluators.
//!
//! Every builtin checks arity, then argument types, and only then acts.
//! Rejections surface as `Object::Error` values; nothing here panics on
//! user input.

use im_rc::Vector;

use super::Host;
use crate::error::BuiltinError;
use crate::object::{Object, ObjectType};

/// Identity of a registered builtin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinId {
    // Sequence access and update
    Len,
    First,
    Last,
    Rest,
    Push,

    // Higher-order
    Filter,
    Map,

    // Diagnostics
    Print,
}

/// Accepted argument count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl BuiltinId {
    /// Every registered builtin, in registration order
    pub const ALL: [BuiltinId; 8] = [
        BuiltinId::Len,
        BuiltinId::First,
        BuiltinId::Last,
        BuiltinId::Rest,
        BuiltinId::Push,
        BuiltinId::Filter,
        BuiltinId::Map,
        BuiltinId::Print,
    ];

    /// Get the built-in function name
    pub fn name(self) -> &'static str {
        match self {
            BuiltinId::Len => "len",
            BuiltinId::First => "first",
            BuiltinId::Last => "last",
            BuiltinId::Rest => "rest",
            BuiltinId::Push => "push",
            BuiltinId::Filter => "filter",
            BuiltinId::Map => "map",
            BuiltinId::Print => "print",
        }
    }

    /// Try to get a built-in by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "len" => Some(BuiltinId::Len),
            "first" => Some(BuiltinId::First),
            "last" => Some(BuiltinId::Last),
            "rest" => Some(BuiltinId::Rest),
            "push" => Some(BuiltinId::Push),
            "filter" => Some(BuiltinId::Filter),
            "map" => Some(BuiltinId::Map),
            "print" => Some(BuiltinId::Print),
            _ => None,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            BuiltinId::Len | BuiltinId::First | BuiltinId::Last | BuiltinId::Rest => {
                Arity::Exact(1)
            }
            BuiltinId::Push | BuiltinId::Filter | BuiltinId::Map => Arity::Exact(2),
            BuiltinId::Print => Arity::Variadic,
        }
    }
}

/// Resolve a name to its builtin value.
///
/// `None` means "not a builtin"; the evaluator decides what an unbound
/// identifier means.
pub fn lookup_builtin(name: &str) -> Option<Object> {
    BuiltinId::from_name(name).map(Object::Builtin)
}

/// Execute a built-in function.
///
/// Total: validation failures come back as `Object::Error`.
pub fn call_builtin(id: BuiltinId, args: &[Object], host: &mut dyn Host) -> Object {
    tracing::trace!(builtin = id.name(), argc = args.len(), "calling builtin");

    match dispatch(id, args, host) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(builtin = id.name(), %err, "builtin rejected its arguments");
            err.into()
        }
    }
}

fn dispatch(id: BuiltinId, args: &[Object], host: &mut dyn Host) -> Result<Object, BuiltinError> {
    match (id, args) {
        (BuiltinId::Len, [value]) => builtin_len(value),
        (BuiltinId::First, [value]) => builtin_first(value),
        (BuiltinId::Last, [value]) => builtin_last(value),
        (BuiltinId::Rest, [value]) => builtin_rest(value),
        (BuiltinId::Push, [array, element]) => builtin_push(array, element),
        (BuiltinId::Filter, [array, function]) => builtin_filter(array, function, host),
        (BuiltinId::Map, [array, function]) => builtin_map(array, function, host),
        (BuiltinId::Print, args) => Ok(builtin_print(args, host)),
        (id, args) => Err(arity_mismatch(id, args.len())),
    }
}

fn arity_mismatch(id: BuiltinId, got: usize) -> BuiltinError {
    let want = match id.arity() {
        Arity::Exact(want) => want,
        // Variadic builtins match every count in `dispatch`
        Arity::Variadic => got,
    };
    BuiltinError::Arity { got, want }
}

fn expect_array(id: BuiltinId, value: &Object) -> Result<&Vector<Object>, BuiltinError> {
    match value {
        Object::Array(elements) => Ok(elements),
        other => Err(BuiltinError::ArgumentType {
            builtin: id.name(),
            expected: ObjectType::Array,
            got: other.object_type(),
        }),
    }
}

fn expect_function(id: BuiltinId, value: &Object) -> Result<&Object, BuiltinError> {
    match value {
        Object::Function(_) => Ok(value),
        other => Err(BuiltinError::ArgumentType {
            builtin: id.name(),
            expected: ObjectType::Function,
            got: other.object_type(),
        }),
    }
}

// ============================================================================
// Sequence Functions
// ============================================================================

/// len(string | array) → Integer
/// Byte length of a string, element count of an array.
fn builtin_len(value: &Object) -> Result<Object, BuiltinError> {
    let len = match value {
        Object::String(s) => s.len(),
        Object::Array(elements) => elements.len(),
        other => {
            return Err(BuiltinError::Unsupported {
                builtin: BuiltinId::Len.name(),
                got: other.object_type(),
            });
        }
    };
    Ok(Object::Integer(len as i64))
}

/// first(array) → Value | null
fn builtin_first(value: &Object) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::First, value)?;
    Ok(elements.front().cloned().unwrap_or(Object::Null))
}

/// last(array) → Value | null
fn builtin_last(value: &Object) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::Last, value)?;
    Ok(elements.back().cloned().unwrap_or(Object::Null))
}

/// rest(array) → Array | null
/// All but the first element. An empty input yields null, not `[]`.
fn builtin_rest(value: &Object) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::Rest, value)?;
    if elements.is_empty() {
        return Ok(Object::Null);
    }
    Ok(Object::Array(elements.skip(1)))
}

/// push(array, value) → Array
/// New array with `value` appended; the input array is left untouched.
fn builtin_push(value: &Object, element: &Object) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::Push, value)?;
    let mut result = elements.clone();
    result.push_back(element.clone());
    Ok(Object::Array(result))
}

// ============================================================================
// Higher-order Functions
// ============================================================================

/// filter(array, fn) → Array
/// Elements for which `fn(element)` is truthy, in order. Never null.
fn builtin_filter(
    value: &Object,
    function: &Object,
    host: &mut dyn Host,
) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::Filter, value)?;
    let function = expect_function(BuiltinId::Filter, function)?;

    let filtered: Vector<Object> = elements
        .iter()
        .filter(|element| host.apply(function, vec![(*element).clone()]).is_truthy())
        .cloned()
        .collect();

    Ok(Object::Array(filtered))
}

/// map(array, fn) → Array
/// `fn(element)` for each element; same length and order as the input.
fn builtin_map(
    value: &Object,
    function: &Object,
    host: &mut dyn Host,
) -> Result<Object, BuiltinError> {
    let elements = expect_array(BuiltinId::Map, value)?;
    let function = expect_function(BuiltinId::Map, function)?;

    let mapped: Vector<Object> = elements
        .iter()
        .map(|element| host.apply(function, vec![element.clone()]))
        .collect();

    Ok(Object::Array(mapped))
}

// ============================================================================
// Diagnostics
// ============================================================================

/// print(...values) → null
/// One rendered line per argument, in call order.
fn builtin_print(args: &[Object], host: &mut dyn Host) -> Object {
    let output = host.diagnostics();
    for arg in args {
        if let Err(err) = writeln!(output, "{arg}") {
            tracing::warn!(%err, "failed to write diagnostic output");
        }
    }
    Object::Null
}
