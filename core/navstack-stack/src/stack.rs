use crate::{StackEntry, StackOps, StackSnapshot};
use navstack_types::{EntryContext, EntryId, Params};

/// The ordered activity stack. The last entry is the top.
#[derive(Debug, Clone, Default)]
pub struct ActivityStack {
    entries: Vec<StackEntry>,
}

impl ActivityStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns its id.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        params: Params,
        context: Option<EntryContext>,
    ) -> EntryId {
        let entry = StackEntry::new(name.into(), params, context);
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Removes and returns the top entry. `None` on an empty stack.
    pub fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop()
    }

    /// Pops the top entry (if any) and pushes a new one.
    ///
    /// Returns the id of the new entry and the entry it displaced.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        params: Params,
        context: Option<EntryContext>,
    ) -> (EntryId, Option<StackEntry>) {
        let removed = self.pop();
        let id = self.push(name, params, context);
        (id, removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Returns an owned copy of the stack.
    #[must_use]
    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot::new(self.entries.clone())
    }
}

impl StackOps for ActivityStack {
    fn snapshot(&self) -> StackSnapshot {
        ActivityStack::snapshot(self)
    }

    fn push(&mut self, name: String, params: Params, context: Option<EntryContext>) {
        ActivityStack::push(self, name, params, context);
    }

    fn pop(&mut self) {
        ActivityStack::pop(self);
    }
}
