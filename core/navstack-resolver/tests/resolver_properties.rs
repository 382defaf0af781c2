//! Property-based tests for the resolver's stack-shape guarantees:
//! - the carrier key never survives into a stored entry
//! - every plan pops a contiguous suffix and never reorders what remains
//! - plain requests always grow the stack by one
//! - `CLEAR_STACK` always leaves exactly the target

use navstack_resolver::{
    FlagCarrier, FlagResolver, MatchPolicy, NavigationRequest, ResolverConfig, StackOp,
};
use navstack_stack::ActivityStack;
use navstack_types::{EntryId, NavFlag, Params};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "E"]).prop_map(String::from)
}

fn stack_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..12)
}

fn flag_strategy() -> impl Strategy<Value = Option<NavFlag>> {
    prop_oneof![
        Just(None),
        Just(Some(NavFlag::SingleTop)),
        Just(Some(NavFlag::ClearStack)),
        name_strategy().prop_map(|a| Some(NavFlag::clear_top(a))),
        name_strategy().prop_map(|a| Some(NavFlag::jump_to(a))),
        name_strategy().prop_map(|a| Some(NavFlag::clear_top_single_top(a))),
        name_strategy().prop_map(|a| Some(NavFlag::jump_to_clear_top(a))),
    ]
}

fn policy_strategy() -> impl Strategy<Value = MatchPolicy> {
    prop_oneof![Just(MatchPolicy::Oldest), Just(MatchPolicy::Newest)]
}

fn build(names: &[String]) -> ActivityStack {
    let mut stack = ActivityStack::new();
    for name in names {
        stack.push(name.clone(), Params::new(), None);
    }
    stack
}

fn ids(stack: &ActivityStack) -> Vec<EntryId> {
    stack.snapshot().entries().iter().map(|e| e.id()).collect()
}

fn carried_request(target: &str, flag: Option<&NavFlag>) -> NavigationRequest {
    let mut params = Params::new();
    params.insert("payload".into(), serde_json::json!(1));
    match flag {
        Some(flag) => FlagCarrier::default().embed(&mut params, flag).unwrap(),
        None => {
            params.insert("__navFlag".into(), serde_json::Value::Null);
        }
    }
    NavigationRequest::new(target).with_params(params)
}

proptest! {
    #[test]
    fn carrier_never_reaches_stored_params(
        names in stack_strategy(),
        target in name_strategy(),
        flag in flag_strategy(),
    ) {
        let mut stack = build(&names);
        FlagResolver::new().resolve(&mut stack, carried_request(&target, flag.as_ref()));

        for entry in stack.snapshot().entries() {
            prop_assert!(!entry.params().contains_key("__navFlag"));
        }
        prop_assert_eq!(stack.top().unwrap().params().get("payload"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn survivors_are_an_untouched_prefix(
        names in stack_strategy(),
        target in name_strategy(),
        flag in flag_strategy(),
        policy in policy_strategy(),
    ) {
        let mut stack = build(&names);
        let before = ids(&stack);
        let resolver = FlagResolver::with_config(ResolverConfig {
            match_policy: policy,
            ..ResolverConfig::default()
        });
        let mut request = NavigationRequest::new(target);
        request.flag = flag;
        let plan = resolver.resolve(&mut stack, request);

        let after = ids(&stack);
        // Exactly one entry is created; everything below it was already there, in order.
        let kept = &after[..after.len() - 1];
        prop_assert_eq!(kept, &before[..kept.len()]);
        prop_assert!(!before.contains(after.last().unwrap()));
        // Pops plus the replaced top (if any) account for every removed entry.
        let replaced = matches!(plan.committed(), Some(StackOp::Replace { .. }));
        prop_assert_eq!(plan.pops() + kept.len() + usize::from(replaced), before.len());
    }

    #[test]
    fn plain_request_grows_by_one(names in stack_strategy(), target in name_strategy()) {
        let mut stack = build(&names);
        FlagResolver::new().resolve(&mut stack, NavigationRequest::new(target.clone()));
        prop_assert_eq!(stack.len(), names.len() + 1);
        prop_assert_eq!(stack.top().unwrap().name(), target.as_str());
    }

    #[test]
    fn clear_stack_always_leaves_target(names in stack_strategy(), target in name_strategy()) {
        let mut stack = build(&names);
        FlagResolver::new().resolve(
            &mut stack,
            NavigationRequest::new(target.clone()).with_flag(NavFlag::ClearStack),
        );
        let snapshot = stack.snapshot();
        prop_assert_eq!(snapshot.names(), vec![target.as_str()]);
    }

    #[test]
    fn absent_activity_falls_back_without_popping(
        names in prop::collection::vec(prop::sample::select(vec!["A", "B"]).prop_map(String::from), 0..8),
        target in name_strategy(),
    ) {
        for flag in [NavFlag::clear_top("Z"), NavFlag::jump_to_clear_top("Z"), NavFlag::clear_top_single_top("Z")] {
            let stack = build(&names);
            let plan = FlagResolver::new().plan(
                &stack.snapshot(),
                NavigationRequest::new(target.clone()).with_flag(flag),
            );
            prop_assert_eq!(plan.pops(), 0);
            prop_assert_eq!(plan.ops().len(), 1);
        }
    }
}
