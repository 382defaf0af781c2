//! Host integration: intercepting navigate actions before they commit.
//!
//! A host dispatches [`NavAction`]s. Before a `Navigate` commits as a plain
//! push, the [`NavigationInterceptor`] looks at the request. When it carries
//! a flag (on its own field or under the carrier key), the interceptor
//! prevents the default push and issues the resolver's primitives through
//! the host instead. Otherwise the host commits the original push.
//!
//! [`NavigationRuntime`] is a complete host: it owns an [`ActivityStack`],
//! runs the interceptor, and notifies [`StackObserver`]s once per created or
//! destroyed entry.

use crate::plan::Plan;
use crate::request::NavigationRequest;
use crate::resolver::FlagResolver;
use navstack_stack::{ActivityStack, StackEntry, StackOps, StackSnapshot};
use navstack_types::{EntryContext, Params};
use std::fmt;
use tracing::{debug, info};

/// What a host must expose for interception: the stack primitives plus a
/// way to suppress the action being dispatched.
pub trait NavigationHost: StackOps {
    /// Suppresses the action currently being dispatched.
    fn prevent_default(&mut self);
}

/// Lifecycle hooks fired by [`RuntimeHost`].
///
/// A rewind that drops three entries fires `on_destroyed` three times.
pub trait StackObserver {
    /// Called after an entry is pushed (including the push half of a replace).
    fn on_created(&mut self, entry: &StackEntry) {
        let _ = entry;
    }

    /// Called after an entry is popped (including the pop half of a replace).
    fn on_destroyed(&mut self, entry: &StackEntry) {
        let _ = entry;
    }
}

/// Result of running the interceptor on a navigate action.
#[derive(Debug, Clone, PartialEq)]
pub enum Interception {
    /// Nothing to resolve; the host should commit this request as a push.
    Proceed(NavigationRequest),
    /// The original action was suppressed and this plan was applied.
    Handled(Plan),
}

/// Runs the resolver in front of a host's push.
#[derive(Debug, Clone, Default)]
pub struct NavigationInterceptor {
    resolver: FlagResolver,
}

impl NavigationInterceptor {
    #[must_use]
    pub fn new(resolver: FlagResolver) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &FlagResolver {
        &self.resolver
    }

    /// Intercepts a navigate action on `host`.
    pub fn intercept<H: NavigationHost + ?Sized>(
        &self,
        host: &mut H,
        request: NavigationRequest,
    ) -> Interception {
        let carried = self.resolver.carrier().is_present(&request.params);
        if request.flag.is_none() && !carried {
            return Interception::Proceed(request);
        }

        info!(
            screen = %request.target,
            flag = ?request.flag,
            carried,
            "Intercepted navigation"
        );
        host.prevent_default();
        Interception::Handled(self.resolver.resolve(host, request))
    }
}

/// Actions a [`NavigationRuntime`] dispatches.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Navigate to a screen. Subject to interception.
    Navigate(NavigationRequest),
    /// Pop the top screen.
    Back,
    /// Pop everything, then push `root`.
    Reset { root: String, params: Params },
}

/// The stack state of a [`NavigationRuntime`], exposed to the interceptor
/// as a [`NavigationHost`].
#[derive(Default)]
pub struct RuntimeHost {
    stack: ActivityStack,
    observers: Vec<Box<dyn StackObserver>>,
    default_prevented: bool,
}

impl RuntimeHost {
    /// Whether the last dispatched action was suppressed.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn notify_created(&mut self) {
        if let Some(entry) = self.stack.top() {
            for observer in &mut self.observers {
                observer.on_created(entry);
            }
        }
    }

    fn notify_destroyed(&mut self, entry: &StackEntry) {
        for observer in &mut self.observers {
            observer.on_destroyed(entry);
        }
    }
}

impl fmt::Debug for RuntimeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeHost")
            .field("stack", &self.stack)
            .field("observers", &self.observers.len())
            .field("default_prevented", &self.default_prevented)
            .finish()
    }
}

impl StackOps for RuntimeHost {
    fn snapshot(&self) -> StackSnapshot {
        self.stack.snapshot()
    }

    fn push(&mut self, name: String, params: Params, context: Option<EntryContext>) {
        self.stack.push(name, params, context);
        self.notify_created();
    }

    fn pop(&mut self) {
        if let Some(entry) = self.stack.pop() {
            debug!(screen = %entry.name(), id = %entry.id(), "Popped entry");
            self.notify_destroyed(&entry);
        }
    }
}

impl NavigationHost for RuntimeHost {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// A self-contained navigation host.
///
/// Dispatch is synchronous: each action runs to a definite stack shape
/// before `dispatch` returns.
#[derive(Debug, Default)]
pub struct NavigationRuntime {
    host: RuntimeHost,
    interceptor: NavigationInterceptor,
}

impl NavigationRuntime {
    /// Creates a runtime with an empty stack and a default resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runtime with the given resolver.
    #[must_use]
    pub fn with_resolver(resolver: FlagResolver) -> Self {
        Self {
            host: RuntimeHost::default(),
            interceptor: NavigationInterceptor::new(resolver),
        }
    }

    /// Registers a lifecycle observer.
    pub fn add_observer(&mut self, observer: Box<dyn StackObserver>) {
        self.host.observers.push(observer);
    }

    /// An owned copy of the current stack.
    #[must_use]
    pub fn stack(&self) -> StackSnapshot {
        self.host.snapshot()
    }

    /// The host state the interceptor runs against.
    #[must_use]
    pub fn host(&self) -> &RuntimeHost {
        &self.host
    }

    #[must_use]
    pub fn interceptor(&self) -> &NavigationInterceptor {
        &self.interceptor
    }

    /// Dispatches one action.
    ///
    /// Returns the plan when a navigate action was intercepted.
    pub fn dispatch(&mut self, action: NavAction) -> Option<Plan> {
        self.host.default_prevented = false;
        match action {
            NavAction::Navigate(request) => {
                match self.interceptor.intercept(&mut self.host, request) {
                    Interception::Handled(plan) => Some(plan),
                    Interception::Proceed(request) if !self.host.default_prevented() => {
                        let context = request.context.map(|extra| EntryContext {
                            reached_by: None,
                            extra: Some(extra),
                        });
                        self.host.push(request.target, request.params, context);
                        None
                    }
                    Interception::Proceed(_) => None,
                }
            }
            NavAction::Back => {
                self.host.pop();
                None
            }
            NavAction::Reset { root, params } => {
                while !self.host.stack.is_empty() {
                    self.host.pop();
                }
                self.host.push(root, params, None);
                None
            }
        }
    }

    /// Shorthand for dispatching [`NavAction::Navigate`].
    pub fn navigate(&mut self, request: NavigationRequest) -> Option<Plan> {
        self.dispatch(NavAction::Navigate(request))
    }

    /// Shorthand for dispatching [`NavAction::Back`].
    pub fn back(&mut self) {
        self.dispatch(NavAction::Back);
    }
}
