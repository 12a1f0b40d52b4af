use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Object;

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// Shared scope chain; clones refer to the same scope
#[derive(Debug, Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// New empty scope whose lookups fall back to `self`
    pub fn enclosed(&self) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            store: HashMap::new(),
            outer: Some(self.clone()),
        })))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        match scope.store.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds in this scope only, shadowing any outer binding
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}
