use crate::FlagKind;
use serde::{Deserialize, Serialize};

/// Informational metadata describing how an entry was reached.
///
/// Attached by the resolver to the entry it creates. Nothing in the
/// resolver ever reads it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryContext {
    /// The flag whose policy produced this entry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reached_by: Option<FlagKind>,
    /// Caller-supplied context forwarded from the navigation request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl EntryContext {
    /// Context for an entry produced by the given flag.
    #[must_use]
    pub fn reached_by(kind: FlagKind) -> Self {
        Self {
            reached_by: Some(kind),
            extra: None,
        }
    }

    /// Attaches caller-supplied context.
    #[must_use]
    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }
}
