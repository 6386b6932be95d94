use super::*;

#[test]
fn removed_handle_goes_stale_after_reuse() {
    let mut arena = Arena::default();
    let a = arena.insert("a");
    assert_eq!(arena.remove(a), Some("a"));

    let b = arena.insert("b");
    assert_eq!(a.index, b.index);
    assert!(arena.get(a).is_none());
    assert_eq!(arena.get(b), Some(&"b"));
    assert!(!arena.contains(a));
}

#[test]
fn double_remove_is_none() {
    let mut arena = Arena::default();
    let a = arena.insert(1);
    assert!(arena.remove(a).is_some());
    assert!(arena.remove(a).is_none());
    assert_eq!(arena.len(), 0);
}

#[test]
fn iter_skips_free_slots() {
    let mut arena = Arena::default();
    let a = arena.insert(1);
    let _b = arena.insert(2);
    arena.remove(a);
    let values: Vec<i32> = arena.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![2]);
}
