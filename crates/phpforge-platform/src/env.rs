//! Credential source abstraction.
//!
//! Provider adapters never read `std::env` directly; they go through an
//! [`Environment`] handed to them at construction. The native implementation
//! maps to OS environment variables, [`MemoryEnvironment`] is an in-memory map
//! used by tests and embedders that manage credentials themselves.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Read access to environment-style key/value configuration.
pub trait Environment: Send + Sync {
    /// Get the value of a variable, or `None` if it is not set.
    fn get_var(&self, name: &str) -> Option<String>;

    /// Like [`get_var`](Environment::get_var) but treats empty and
    /// whitespace-only values as unset.
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get_var(name).filter(|v| !v.trim().is_empty())
    }

    /// First non-empty value among `names`, in order.
    fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|n| self.get_non_empty(n))
    }
}

/// Native environment backed by [`std::env`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEnvironment;

impl Environment for NativeEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment. Values can be changed after construction, which
/// lets tests model credentials appearing or disappearing at runtime.
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }

    pub fn set_var(&self, name: &str, value: &str) {
        self.vars.write().insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_var(&self, name: &str) {
        self.vars.write().remove(name);
    }
}

impl Environment for MemoryEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        self.vars.read().get(name).cloned()
    }
}
