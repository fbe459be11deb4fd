use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::Value;

/// A chained mapping from identifier to runtime value.
///
/// Lookups that miss locally recurse to the enclosing environment before
/// failing, innermost first. Function values capture a shared reference to
/// the environment active at their definition site, and a call encloses a
/// fresh environment in the captured one, never in the caller's; that is
/// what makes scoping static rather than dynamic.
///
/// The global environment lives for the whole session. A call environment
/// is discarded once the call returns, unless a closure created inside it
/// escapes and keeps it alive by shared ownership.
///
/// ## Example
/// ```
/// use lemur::interpreter::{environment::Environment, value::Value};
/// use std::{cell::RefCell, rc::Rc};
///
/// let outer = Rc::new(RefCell::new(Environment::new()));
/// outer.borrow_mut().set("x".to_string(), Value::Integer(2));
///
/// let inner = Environment::enclosed(Rc::clone(&outer));
/// assert_eq!(inner.get("x"), Some(Value::Integer(2)));
/// ```
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an empty environment with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None, }
    }

    /// Creates an empty environment enclosed by `outer`.
    #[must_use]
    pub fn enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Resolves a name, recursing to the enclosing environment on a local
    /// miss.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this environment, shadowing any enclosing binding.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

impl fmt::Debug for Environment {
    /// Closures stored in the environment they were defined in make scope
    /// chains cyclic; stays shallow instead of following values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("names", &self.store.keys().collect::<Vec<_>>())
         .field("enclosed", &self.outer.is_some())
         .finish()
    }
}
