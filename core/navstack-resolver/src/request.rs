use navstack_types::{NavFlag, Params};
use serde_json::Value;

/// A request to navigate to a named screen.
///
/// The flag normally travels on its own field. Requests built from a
/// host's generic `(name, params)` call may instead carry it inside
/// `params` under the carrier key; the resolver accepts either and always
/// strips the key.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub target: String,
    pub params: Params,
    pub flag: Option<NavFlag>,
    /// Caller-supplied context, forwarded to the created entry.
    pub context: Option<Value>,
}

impl NavigationRequest {
    /// A plain request for `target` with empty params.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            params: Params::new(),
            flag: None,
            context: None,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: NavFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}
