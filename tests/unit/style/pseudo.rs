use super::*;

#[test]
fn markers_combine_and_strip() {
    assert_eq!(
        split_pseudo_key("backgroundColor:active"),
        Some(("backgroundColor", PseudoState::ACTIVE))
    );
    assert_eq!(
        split_pseudo_key("color:focus:checked"),
        Some(("color", PseudoState::FOCUS | PseudoState::CHECKED))
    );
    assert_eq!(split_pseudo_key("width"), Some(("width", PseudoState::NORMAL)));
    assert_eq!(split_pseudo_key("color:hover"), None);
}

#[test]
fn cached_mask_only_grows() {
    let mut cache = PseudoClassCache::default();
    assert!(!cache.has_pseudo());
    cache.cache_style("opacity:disabled", "0.5");
    cache.cache_style("opacity", "1");
    cache.cache_style("opacity:waiting", "0.2");
    assert_eq!(
        cache.cached_mask(),
        PseudoState::DISABLED | PseudoState::WAITING
    );
    assert!(cache.declares(PseudoState::DISABLED));
    assert!(!cache.declares(PseudoState::ACTIVE));
}

#[test]
fn redeclaring_overwrites_in_place() {
    let mut cache = PseudoClassCache::default();
    cache.cache_style("color:active", "#111111");
    cache.cache_style("width:active", "10px");
    cache.cache_style("color:active", "#222222");
    let decls = cache.get(PseudoState::ACTIVE).unwrap();
    assert_eq!(decls.len(), 2);
    assert_eq!(decls.get("color"), Some("#222222"));
    let keys: Vec<&str> = decls.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["color", "width"]);
}

#[test]
fn round_trip_ignores_unrelated_declaration_order() {
    let mut a = PseudoClassCache::default();
    a.cache_style("height", "3px");
    a.cache_style("color:focus", "#ABCDEF");

    let mut b = PseudoClassCache::default();
    b.cache_style("color:focus", "#ABCDEF");
    b.cache_style("height", "3px");

    for cache in [a, b] {
        assert_eq!(
            cache.get(PseudoState::FOCUS).unwrap().get("color"),
            Some("#ABCDEF")
        );
    }
}

#[test]
fn select_prefers_exact_then_best_overlap() {
    let mut cache = PseudoClassCache::default();
    cache.cache_style("color", "#000000");
    cache.cache_style("color:active", "#000001");
    cache.cache_style("color:focus", "#000004");

    assert_eq!(cache.select(PseudoState::ACTIVE), Some(PseudoState::ACTIVE));
    assert_eq!(
        cache.select(PseudoState::FOCUS | PseudoState::CHECKED),
        Some(PseudoState::FOCUS)
    );
    assert_eq!(cache.select(PseudoState::WAITING), None);
    assert_eq!(cache.select(PseudoState::NORMAL), Some(PseudoState::NORMAL));
}

#[test]
fn ties_resolve_to_lowest_mask() {
    let mut cache = PseudoClassCache::default();
    cache.cache_style("color:focus:checked", "#0000CC");
    cache.cache_style("color:focus:waiting", "#0000DD");
    cache.cache_style("color:focus", "#0000EE");
    // each overlaps FOCUS|ACTIVE only through FOCUS
    let status = PseudoState::FOCUS | PseudoState::ACTIVE;
    assert_eq!(cache.select(status), Some(PseudoState::FOCUS));
}

#[test]
fn layers_iterate_in_ascending_bit_order() {
    let mut cache = PseudoClassCache::default();
    cache.cache_style("color:waiting", "#000010");
    cache.cache_style("color:active:focus", "#000005");
    cache.cache_style("color", "#000000");
    cache.cache_style("color:disabled", "#000002");

    let order: Vec<u32> = cache.iter().map(|(mask, _)| mask.bits()).collect();
    assert_eq!(order, vec![0, 2, 5, 16]);
    assert_eq!(PseudoState::default(), PseudoState::NORMAL);
    assert!(PseudoState::from_bits_retain(5).contains(PseudoState::FOCUS));
}
