//! The navigation-flag resolver.
//!
//! Planning is a pure function of the stack snapshot and the request.
//! Every branch ends in exactly one push or replace, preceded by zero or
//! more pops of a contiguous suffix of the stack.
//!
//! Rewind-and-replace (shared by `ClearTop` and both combo flags): with the
//! match at index `i` in a stack of length `n`, issue `n - i - 1` single
//! pops, then one replace at the new top.

use crate::carrier::{Carried, FlagCarrier};
use crate::config::{MatchPolicy, ResolverConfig};
use crate::plan::{Plan, StackOp};
use crate::request::NavigationRequest;
use navstack_stack::{StackOps, StackSnapshot};
use navstack_types::{EntryContext, FlagKind, NavFlag, Params};
use serde_json::Value;
use tracing::{debug, warn};

/// Translates navigation requests into primitive stack mutations.
#[derive(Debug, Clone, Default)]
pub struct FlagResolver {
    config: ResolverConfig,
    carrier: FlagCarrier,
}

impl FlagResolver {
    /// Creates a resolver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with explicit settings.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        let carrier = config.carrier();
        Self { config, carrier }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn carrier(&self) -> &FlagCarrier {
        &self.carrier
    }

    /// Decides the primitive sequence for `request` against `snapshot`.
    ///
    /// The carrier key is stripped from the params before anything else.
    /// A flag on the request's own field takes precedence over a carried one.
    pub fn plan(&self, snapshot: &StackSnapshot, request: NavigationRequest) -> Plan {
        let NavigationRequest {
            target,
            mut params,
            flag,
            context,
        } = request;

        let carried = self.carrier.take(&mut params);
        if let Carried::Unrecognized(ref value) = carried {
            warn!(
                screen = %target,
                carried = %value,
                "Unrecognized navigation flag, treating as plain push"
            );
        }
        let flag = flag.or_else(|| carried.into_flag());
        debug!(screen = %target, flag = ?flag, depth = snapshot.len(), "Planning navigation");

        let entry_context = build_context(flag.as_ref().map(NavFlag::kind), context);
        let mut ops = Vec::new();

        match flag {
            None => ops.push(push(target, params, entry_context)),
            Some(NavFlag::SingleTop) => {
                ops.push(single_top(snapshot, target, params, entry_context));
            }
            Some(NavFlag::ClearTop { activity }) => match self.find(snapshot, &activity) {
                Some(index) => {
                    rewind(snapshot.len(), index, activity, params, entry_context, &mut ops);
                }
                None => ops.push(push(target, params, entry_context)),
            },
            Some(NavFlag::ClearStack) => {
                ops.extend(std::iter::repeat_n(StackOp::Pop, snapshot.len()));
                ops.push(push(target, params, entry_context));
            }
            Some(NavFlag::JumpTo { activity }) => ops.push(push(activity, params, entry_context)),
            Some(NavFlag::ClearTopSingleTop { activity }) => match self.find(snapshot, &activity) {
                Some(index) => {
                    rewind(snapshot.len(), index, activity, params, entry_context, &mut ops);
                }
                None => ops.push(single_top(snapshot, target, params, entry_context)),
            },
            Some(NavFlag::JumpToClearTop { activity }) => match self.find(snapshot, &activity) {
                Some(index) => {
                    rewind(snapshot.len(), index, activity, params, entry_context, &mut ops);
                }
                None => ops.push(push(activity, params, entry_context)),
            },
        }

        Plan::new(ops)
    }

    /// Plans `request` against the current stack and issues the primitives.
    ///
    /// Returns the plan that was applied.
    pub fn resolve<S: StackOps + ?Sized>(&self, stack: &mut S, request: NavigationRequest) -> Plan {
        let plan = self.plan(&stack.snapshot(), request);
        debug!(pops = plan.pops(), plan = %plan, "Applying navigation plan");
        plan.apply(stack);
        plan
    }

    fn find(&self, snapshot: &StackSnapshot, name: &str) -> Option<usize> {
        match self.config.match_policy {
            MatchPolicy::Oldest => snapshot.position_first(name),
            MatchPolicy::Newest => snapshot.position_last(name),
        }
    }
}

fn build_context(kind: Option<FlagKind>, extra: Option<Value>) -> Option<EntryContext> {
    match (kind, extra) {
        (None, None) => None,
        (reached_by, extra) => Some(EntryContext { reached_by, extra }),
    }
}

fn push(name: String, params: Params, context: Option<EntryContext>) -> StackOp {
    StackOp::Push {
        name,
        params,
        context,
    }
}

fn replace(name: String, params: Params, context: Option<EntryContext>) -> StackOp {
    StackOp::Replace {
        name,
        params,
        context,
    }
}

fn single_top(
    snapshot: &StackSnapshot,
    target: String,
    params: Params,
    context: Option<EntryContext>,
) -> StackOp {
    let on_top = snapshot.top().is_some_and(|top| top.name() == target);
    if on_top {
        replace(target, params, context)
    } else {
        push(target, params, context)
    }
}

fn rewind(
    len: usize,
    index: usize,
    name: String,
    params: Params,
    context: Option<EntryContext>,
    ops: &mut Vec<StackOp>,
) {
    ops.extend(std::iter::repeat_n(StackOp::Pop, len - index - 1));
    ops.push(replace(name, params, context));
}
