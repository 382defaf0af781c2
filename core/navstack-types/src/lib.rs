//! Core type definitions for navstack.
//!
//! This crate defines the plain data shared by the stack and the resolver:
//! - Stack entry identifiers (UUID v7)
//! - Navigation flags modeled after mobile-OS intent flags
//! - The params payload and the context attached to created entries
//!
//! Nothing here mutates a stack; see `navstack-stack` and
//! `navstack-resolver` for that.

mod context;
mod flag;
mod ids;

pub use context::EntryContext;
pub use flag::{FlagKind, NavFlag};
pub use ids::EntryId;

/// Opaque key/value payload forwarded from a navigation request to the
/// entry it creates.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid navigation flag: {0}")]
    InvalidFlag(String),
}
