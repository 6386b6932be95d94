use super::*;

fn one() -> i32 {
    1
}

fn two() -> i32 {
    2
}

#[test]
fn lookup_hits_and_misses() {
    let table = PropertyTable::new(&[("b", two as fn() -> i32), ("a", one)]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a").map(|f| f()), Some(1));
    assert_eq!(table.get("b").map(|f| f()), Some(2));
    assert!(table.get("c").is_none());
}

#[test]
#[should_panic(expected = "duplicate property key")]
#[cfg(debug_assertions)]
fn duplicate_keys_are_rejected() {
    let _ = PropertyTable::new(&[("a", one as fn() -> i32), ("a", two)]);
}
