use navstack_types::EntryId;
use std::collections::HashSet;

#[test]
fn entry_id_new_is_unique() {
    let a = EntryId::new();
    let b = EntryId::new();
    assert_ne!(a, b);
}

#[test]
fn entry_id_later_sorts_after_earlier() {
    let a = EntryId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = EntryId::new();
    assert!(a < b);
}

#[test]
fn entry_id_hash_and_eq() {
    let id = EntryId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn entry_id_serializes_as_bare_string() {
    let id = EntryId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let parsed: EntryId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}
