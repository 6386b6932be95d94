use super::*;

fn cache() -> PseudoClassCache {
    let mut cache = PseudoClassCache::default();
    cache.cache_style("backgroundColor:active", "#FF0000");
    cache.cache_style("backgroundColor", "#00FF00");
    cache.cache_style("width", "10px");
    cache
}

#[test]
fn normal_layer_precedes_override() {
    let cache = cache();
    let plan = plan(&cache, PseudoState::ACTIVE);
    assert_eq!(plan.layer_count(), 2);
    let decls: Vec<_> = plan.declarations().collect();
    assert_eq!(
        decls,
        vec![
            ("backgroundColor", "#00FF00"),
            ("width", "10px"),
            ("backgroundColor", "#FF0000"),
        ]
    );
}

#[test]
fn normal_status_applies_baseline_once() {
    let cache = cache();
    let plan = plan(&cache, PseudoState::NORMAL);
    assert_eq!(plan.layer_count(), 1);
    assert_eq!(plan.selected, Some(PseudoState::NORMAL));
}

#[test]
fn unmatched_status_keeps_baseline() {
    let cache = cache();
    let plan = plan(&cache, PseudoState::WAITING);
    assert_eq!(plan.selected, None);
    let decls: Vec<_> = plan.declarations().collect();
    assert_eq!(decls.len(), 2);
}

#[test]
fn planning_is_idempotent() {
    let cache = cache();
    for status in 0..32 {
        let status = PseudoState::from_bits_retain(status);
        let a: Vec<_> = plan(&cache, status).declarations().collect();
        let b: Vec<_> = plan(&cache, status).declarations().collect();
        assert_eq!(a, b);
    }
}
