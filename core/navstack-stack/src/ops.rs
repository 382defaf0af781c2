use crate::StackSnapshot;
use navstack_types::{EntryContext, Params};

/// The primitive mutations a navigation host exposes.
///
/// Every call succeeds. `pop` on an empty stack does nothing and `replace`
/// on an empty stack behaves like `push`.
pub trait StackOps {
    /// Returns an owned copy of the current stack.
    fn snapshot(&self) -> StackSnapshot;

    /// Appends a new entry with a freshly minted id.
    fn push(&mut self, name: String, params: Params, context: Option<EntryContext>);

    /// Removes the top entry, if any.
    fn pop(&mut self);

    /// Pops the top entry (if any), then pushes a new one.
    fn replace(&mut self, name: String, params: Params, context: Option<EntryContext>) {
        self.pop();
        self.push(name, params, context);
    }
}
