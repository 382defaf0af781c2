//! Navigation-flag resolver for navstack.
//!
//! Translates a [`NavigationRequest`] (target screen, params, optional
//! [`NavFlag`](navstack_types::NavFlag)) into the minimal sequence of
//! primitive stack mutations that satisfies the flag's policy:
//!
//! - [`FlagResolver`]: pure planning plus application through
//!   [`StackOps`](navstack_stack::StackOps)
//! - [`FlagCarrier`]: the reserved params key that smuggles a flag through
//!   a generic payload, and the sanitization that strips it
//! - [`NavigationInterceptor`] / [`NavigationRuntime`]: the host dispatch
//!   contract: suppress the original push, run the resolver instead
//! - [`ResolverConfig`]: carrier key and match policy, loadable from TOML
//!
//! Resolution is synchronous and infallible. Every flag has a defined
//! fallback, and an unrecognized flag behaves like no flag at all.

mod carrier;
mod config;
mod error;
mod host;
mod plan;
mod request;
mod resolver;

pub use carrier::{Carried, DEFAULT_CARRIER_KEY, FlagCarrier};
pub use config::{MatchPolicy, ResolverConfig};
pub use error::{ConfigError, ConfigResult};
pub use host::{
    Interception, NavAction, NavigationHost, NavigationInterceptor, NavigationRuntime,
    RuntimeHost, StackObserver,
};
pub use plan::{Plan, StackOp};
pub use request::NavigationRequest;
pub use resolver::FlagResolver;
