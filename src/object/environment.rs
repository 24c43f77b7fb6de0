//! The scope chain for the Lince evaluator.
//!
//! An [`Environment`] maps identifier names to values and optionally points
//! at an enclosing scope. Lookups walk the chain outward; writes always go
//! to the innermost scope.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

/// A shared handle to an environment.
///
/// Environments are shared mutably between the frame that created them and
/// every closure that captured them, so they live behind
/// `Rc<RefCell<_>>`. The `outer` chains form a DAG toward the root and the
/// language has no way to create a cycle among them, so reference counting
/// is sufficient to manage their lifetime.
pub type Env = Rc<RefCell<Environment>>;

/// A single scope: a name-to-value map plus an optional enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh root environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates a child scope enclosed by `outer`.
    ///
    /// The outer reference is fixed at construction and never rebound.
    pub fn enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks `name` up in this scope, then outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` in this scope, unconditionally.
    ///
    /// Declarations and assignments both land here, which is why an inner
    /// scope cannot shadow an outer binding: the write goes to the
    /// innermost scope the evaluator is currently running in.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
