//! Single store built from namespaced modules.
//!
//! Every module declares its state, the mutations that may change it, and
//! a namespace used to address them. Actions carry the business rules and
//! reach state only through an [`ActionContext`], which offers a read-only
//! view and `commit`. Module state is private to the store, so a mutation
//! is the only way to change it.

pub mod cart;
pub mod products;
mod store;

pub use cart::{CartAction, CartModule, CartMutation};
pub use products::{ProductsModule, ProductsMutation};
pub use store::Store;

/// A namespaced slice of store state.
pub trait Module {
    /// Prefix for this module's mutations and actions, e.g. `"cart"`.
    const NAMESPACE: &'static str;

    /// State owned by the module.
    type State;

    /// The only operations allowed to change [`Module::State`].
    type Mutation: Named;

    /// Error a mutation may reject with.
    type Error;

    /// Apply one mutation.
    fn apply(state: &mut Self::State, mutation: Self::Mutation) -> Result<(), Self::Error>;
}

/// Operations that are addressed by name inside their namespace.
pub trait Named {
    /// Name without namespace, e.g. `"addToCart"`.
    fn name(&self) -> &'static str;
}

/// Typed handle given to actions: read the module state, commit mutations.
pub struct ActionContext<'a, M: Module> {
    state: &'a mut M::State,
    journal: &'a mut Journal,
}

impl<'a, M: Module> ActionContext<'a, M> {
    pub(crate) fn new(state: &'a mut M::State, journal: &'a mut Journal) -> Self {
        Self { state, journal }
    }

    /// Current module state.
    pub fn state(&self) -> &M::State {
        &*self.state
    }

    /// Apply a mutation and record it in the store journal.
    pub fn commit(&mut self, mutation: M::Mutation) -> Result<(), M::Error> {
        let name = qualified_name(M::NAMESPACE, mutation.name());
        M::apply(&mut *self.state, mutation)?;
        tracing::debug!(mutation = %name, "commit");
        self.journal.record(name);
        Ok(())
    }
}

/// Bounded record of committed mutation names, oldest first.
///
/// Keeps the most recent `capacity` entries. A capacity of 0 records nothing.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: Vec<String>,
    capacity: usize,
}

impl Journal {
    /// Entries kept by [`Journal::default`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    fn record(&mut self, name: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(name);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

/// `namespace/name`, the address of an operation inside the store.
pub fn qualified_name(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_drops_oldest_at_capacity() {
        let mut journal = Journal::with_capacity(2);
        for name in ["a", "b", "c"] {
            journal.record(name.to_string());
        }
        assert_eq!(journal.entries(), ["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut journal = Journal::with_capacity(0);
        journal.record("a".to_string());
        assert!(journal.entries().is_empty());
    }
}
