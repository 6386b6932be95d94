use super::*;
use crate::foundation::ids::{NodeId, PageId};

fn leaf() -> LeafComponent {
    LeafComponent::new(NodeId(1), "leaf")
}

#[test]
fn tags_map_to_builtin_kinds() {
    assert_eq!(kind_for_tag("div").leaf_name(), "flex");
    assert_eq!(kind_for_tag("text").leaf_name(), "text");
    assert_eq!(kind_for_tag("span").leaf_name(), "text_span");
    assert_eq!(kind_for_tag("button").leaf_name(), "button");
    assert_eq!(kind_for_tag("image").leaf_name(), "image");
    assert!(!kind_for_tag("span").has_box());
    assert!(!kind_for_tag("span").ui_components());
    assert!(kind_for_tag("image").has_box());
}

#[test]
fn div_direction_and_wrap() {
    let parser = ValueParser::default();
    let mut div = DivKind::default();
    assert_eq!(div.flex_column(), Some(false));
    assert!(div.try_set_style("flexDirection", "column", &parser));
    assert!(div.try_set_style("flexWrap", "wrap", &parser));
    assert!(!div.try_set_style("width", "10px", &parser));
    assert_eq!(div.flex_column(), Some(true));
    assert_eq!(div.leaf_name(), "wrap");

    let mut l = leaf();
    div.prepare_leaf(&mut l);
    assert_eq!(l.name, "wrap");
    assert_eq!(l.props.get("direction"), Some(&json!("column")));
    assert!(l.props.contains_key("alignContent"));
}

#[test]
fn div_reset_keeps_attributes() {
    let parser = ValueParser::default();
    let mut div = DivKind::default();
    assert!(div.try_set_attr("card", "true"));
    div.try_set_style("flexDirection", "column", &parser);
    div.reset_style();
    assert_eq!(div.flex_column(), Some(false));
    assert!(div.card);
}

#[test]
fn text_value_survives_reset() {
    let parser = ValueParser::default();
    let mut text = TextKind::new(false);
    assert!(text.try_set_attr("value", "hello"));
    assert!(text.try_set_style("color", "#FF0000", &parser));
    assert!(text.try_set_style("maxLines", "2", &parser));

    let mut l = leaf();
    text.prepare_leaf(&mut l);
    assert_eq!(l.props.get("color"), Some(&json!("#FFFF0000")));
    assert_eq!(l.props.get("maxLines"), Some(&json!(2)));

    text.reset_style();
    text.prepare_leaf(&mut l);
    assert_eq!(l.props.get("value"), Some(&json!("hello")));
    assert!(!l.props.contains_key("color"));
}

#[test]
fn span_rejects_block_styles() {
    let parser = ValueParser::default();
    let mut span = TextKind::new(true);
    assert!(!span.try_set_style("textAlign", "center", &parser));
    assert!(span.try_set_style("fontSize", "12px", &parser));
}

#[test]
fn button_consumes_click_only() {
    let mut button = ButtonKind::default();
    let click = EventMarker::new(NodeId(2), "click", PageId(1));
    let touch = EventMarker::new(NodeId(2), "touchstart", PageId(1));
    assert!(button.try_add_event(&click));
    assert!(!button.try_add_event(&touch));
    assert_eq!(button.click, Some(click));
}

#[test]
fn button_set_progress() {
    let mut button = ButtonKind::default();
    assert!(button.call_method("setProgress", &json!([{ "progress": 250 }])));
    assert_eq!(button.progress, Some(100));

    assert!(button.call_method("setProgress", &json!({ "progress": 10 })));
    assert_eq!(button.progress, Some(100));

    assert!(!button.call_method("explode", &json!([])));
}
