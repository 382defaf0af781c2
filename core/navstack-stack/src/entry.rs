use navstack_types::{EntryContext, EntryId, Params};
use serde::Serialize;

/// A single screen on the activity stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackEntry {
    id: EntryId,
    name: String,
    params: Params,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<EntryContext>,
}

impl StackEntry {
    pub(crate) fn new(name: String, params: Params, context: Option<EntryContext>) -> Self {
        Self {
            id: EntryId::new(),
            name,
            params,
            context,
        }
    }

    /// The entry's unique id.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The logical screen name. Not unique across the stack.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn context(&self) -> Option<&EntryContext> {
        self.context.as_ref()
    }
}

/// An owned, read-only copy of the stack at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StackSnapshot {
    entries: Vec<StackEntry>,
}

impl StackSnapshot {
    pub(crate) fn new(entries: Vec<StackEntry>) -> Self {
        Self { entries }
    }

    /// Entries bottom-first; the last one is the top.
    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The currently active entry.
    #[must_use]
    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Entry names bottom-first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(StackEntry::name).collect()
    }

    /// Index of the oldest entry with the given name.
    #[must_use]
    pub fn position_first(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Index of the most recent entry with the given name.
    #[must_use]
    pub fn position_last(&self, name: &str) -> Option<usize> {
        self.entries.iter().rposition(|e| e.name == name)
    }
}
