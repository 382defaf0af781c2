//! Activity stack for navstack.
//!
//! An ordered log of [`StackEntry`] values mutated only through three
//! primitives:
//!
//! - `push` appends a fresh entry
//! - `pop` removes the top entry (no-op when empty)
//! - `replace` is `pop` followed by `push`
//!
//! Entries are never edited in place. Readers take a [`StackSnapshot`],
//! which owns its own copy of the entries.

mod entry;
mod ops;
mod stack;

pub use entry::{StackEntry, StackSnapshot};
pub use ops::StackOps;
pub use stack::ActivityStack;
