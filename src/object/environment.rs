//! The lexically-scoped environment chain.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::Value;

/// A shared handle to an environment.
///
/// Environments are shared between the scope that created them, any
/// closures that captured them, and any call activations derived from
/// those closures, so they need shared ownership. Evaluation is strictly
/// single-threaded, which makes `Rc<RefCell<_>>` sufficient; an
/// environment is freed when the last closure or frame referring to it
/// is dropped.
pub type Env = Rc<RefCell<Environment>>;

/// A mapping from identifier names to values, with an optional outer
/// (enclosing) environment.
///
/// Lookup walks the outer chain from the innermost frame outward;
/// binding always writes to the innermost frame. The outer chain is
/// acyclic: a child is only ever created from an existing parent.
#[derive(Debug, Default)]
pub struct Environment {
    /// The bindings of this frame.
    store: HashMap<String, Value>,
    /// The enclosing environment, if any.
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new top-level environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates a new environment enclosed by `outer`.
    ///
    /// Used for call activations: the new frame holds the parameter
    /// bindings and resolves everything else through the captured
    /// environment.
    pub fn enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up a name, walking the outer chain.
    ///
    /// Returns a clone of the bound value, or `None` if the name is
    /// unbound in every frame.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer
            .as_ref()
            .and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this frame.
    ///
    /// A `let` with an existing name in the same frame overwrites the
    /// binding; outer bindings are never touched.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
