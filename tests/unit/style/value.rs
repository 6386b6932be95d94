use super::*;
use crate::foundation::core::{DimensionOffset, DimensionUnit};
use crate::style::theme::StaticTheme;

#[test]
fn literal_values_parse_without_theme() {
    let p = ValueParser::default();
    assert_eq!(p.color("#00FF00"), Color::rgba(0, 255, 0, 255));
    assert_eq!(p.dimension("100px"), Dimension::px(100.0));
    assert_eq!(p.double("0.25"), 0.25);
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let p = ValueParser::default();
    assert_eq!(p.color("not-a-color"), Color::TRANSPARENT);
    assert_eq!(p.dimension("wide"), Dimension::default());
    assert_eq!(p.double("NaN"), 0.0);
}

#[test]
fn references_resolve_through_theme() {
    let theme = StaticTheme::default()
        .with_name("sys.color.primary", "#FF0000")
        .with_id(125829120, "24vp");
    let p = ValueParser::new(Some(&theme));
    assert_eq!(p.color("@sys.color.primary"), Color::rgba(255, 0, 0, 255));
    assert_eq!(
        p.dimension("@ohos_id_125829120"),
        Dimension::new(24.0, DimensionUnit::Vp)
    );
}

#[test]
fn references_without_store_use_defaults() {
    let p = ValueParser::default();
    assert_eq!(p.color("@sys.color.primary"), Color::TRANSPARENT);
    assert_eq!(p.dimension("@id7"), Dimension::default());
}

#[test]
fn font_families_resolve_each_entry() {
    let theme = StaticTheme::default().with_name("font.body", "HarmonyOS Sans");
    let p = ValueParser::new(Some(&theme));
    assert_eq!(
        p.font_families("serif, @font.body ,@font.missing"),
        vec!["serif".to_string(), "HarmonyOS Sans".to_string()]
    );
}

#[test]
fn preferred_font_sizes_sort_descending() {
    let p = ValueParser::default();
    let sizes = p.preferred_font_sizes("12px, 30px,bogus, 16px");
    let values: Vec<f64> = sizes.iter().map(|d| d.value).collect();
    assert_eq!(values, vec![30.0, 16.0, 12.0]);
}

#[test]
fn scalar_helpers() {
    assert!(parse_bool("true"));
    assert!(!parse_bool("TRUE"));
    assert_eq!(parse_i32("7"), 7);
    assert_eq!(parse_i32("x"), 0);
    assert_eq!(parse_duration_ms("300ms"), 300.0);
    assert_eq!(parse_duration_ms("2s"), 2000.0);
    assert_eq!(parse_duration_ms("1.5"), 1500.0);
    assert_eq!(parse_degrees("90deg"), Some(90.0));
    assert_eq!(parse_degrees("0.5turn"), Some(180.0));
    assert_eq!(function_arg("blur(4px)", "blur"), Some("4px"));
    assert_eq!(function_arg("grayscale(1)", "blur"), None);
    assert_eq!(tokens("  1px  solid #000 "), vec!["1px", "solid", "#000"]);
}

#[test]
fn positions_accept_keywords_and_lengths() {
    let p = ValueParser::default();
    assert_eq!(
        p.position("10px 20px"),
        Some(DimensionOffset::new(Dimension::px(10.0), Dimension::px(20.0)))
    );
    assert_eq!(
        p.position("right"),
        Some(DimensionOffset::new(
            Dimension::percent(1.0),
            Dimension::percent(0.5)
        ))
    );
    assert_eq!(p.position("1px 2px 3px"), None);
    assert_eq!(p.position("sideways"), None);
}
