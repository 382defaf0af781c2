use navstack_stack::{ActivityStack, StackOps};
use navstack_types::{EntryContext, FlagKind, Params};
use pretty_assertions::assert_eq;
use serde_json::json;

fn params(value: serde_json::Value) -> Params {
    value.as_object().cloned().unwrap_or_default()
}

fn stack_of(names: &[&str]) -> ActivityStack {
    let mut stack = ActivityStack::new();
    for name in names {
        stack.push(*name, Params::new(), None);
    }
    stack
}

// ── push ──────────────────────────────────────────────────────────

#[test]
fn push_appends_to_top() {
    let stack = stack_of(&["A", "B", "C"]);
    assert_eq!(stack.snapshot().names(), vec!["A", "B", "C"]);
    assert_eq!(stack.top().unwrap().name(), "C");
}

#[test]
fn push_mints_distinct_ids_for_same_name() {
    let mut stack = ActivityStack::new();
    let a = stack.push("A", Params::new(), None);
    let b = stack.push("A", Params::new(), None);
    assert_ne!(a, b);
    assert_eq!(stack.len(), 2);
}

#[test]
fn push_stores_params_and_context() {
    let mut stack = ActivityStack::new();
    stack.push(
        "detail",
        params(json!({"id": 7})),
        Some(EntryContext::reached_by(FlagKind::JumpTo)),
    );
    let top = stack.top().unwrap();
    assert_eq!(top.params(), &params(json!({"id": 7})));
    assert_eq!(top.context().unwrap().reached_by, Some(FlagKind::JumpTo));
}

// ── pop ───────────────────────────────────────────────────────────

#[test]
fn pop_removes_top() {
    let mut stack = stack_of(&["A", "B"]);
    let removed = stack.pop().unwrap();
    assert_eq!(removed.name(), "B");
    assert_eq!(stack.snapshot().names(), vec!["A"]);
}

#[test]
fn pop_on_empty_is_noop() {
    let mut stack = ActivityStack::new();
    assert!(stack.pop().is_none());
    assert!(stack.is_empty());
}

// ── replace ───────────────────────────────────────────────────────

#[test]
fn replace_swaps_top_and_keeps_depth() {
    let mut stack = stack_of(&["A", "B"]);
    let old_top = stack.top().unwrap().id();
    let (new_id, removed) = stack.replace("B", params(json!({"v": 2})), None);
    assert_eq!(removed.unwrap().id(), old_top);
    assert_ne!(new_id, old_top);
    assert_eq!(stack.snapshot().names(), vec!["A", "B"]);
    assert_eq!(stack.top().unwrap().params(), &params(json!({"v": 2})));
}

#[test]
fn replace_on_empty_degenerates_to_push() {
    let mut stack = ActivityStack::new();
    let (_, removed) = stack.replace("home", Params::new(), None);
    assert!(removed.is_none());
    assert_eq!(stack.snapshot().names(), vec!["home"]);
}

#[test]
fn trait_primitives_match_inherent_ones() {
    let mut stack = stack_of(&["A"]);
    StackOps::push(&mut stack, "B".into(), Params::new(), None);
    StackOps::replace(&mut stack, "C".into(), Params::new(), None);
    StackOps::pop(&mut stack);
    StackOps::pop(&mut stack);
    StackOps::pop(&mut stack);
    assert!(StackOps::snapshot(&stack).is_empty());
}

// ── snapshot ──────────────────────────────────────────────────────

#[test]
fn snapshot_is_detached_from_live_stack() {
    let mut stack = stack_of(&["A", "B"]);
    let before = stack.snapshot();
    stack.pop();
    stack.push("C", Params::new(), None);
    assert_eq!(before.names(), vec!["A", "B"]);
    assert_eq!(stack.snapshot().names(), vec!["A", "C"]);
}

#[test]
fn snapshot_positions() {
    let snapshot = stack_of(&["A", "B", "A", "C"]).snapshot();
    assert_eq!(snapshot.position_first("A"), Some(0));
    assert_eq!(snapshot.position_last("A"), Some(2));
    assert_eq!(snapshot.position_first("Z"), None);
    assert_eq!(snapshot.top().unwrap().name(), "C");
}

#[test]
fn snapshot_serializes_entries() {
    let mut stack = ActivityStack::new();
    let id = stack.push("A", params(json!({"k": "v"})), None);
    let value = serde_json::to_value(stack.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({"entries": [{"id": id.to_string(), "name": "A", "params": {"k": "v"}}]})
    );
}
