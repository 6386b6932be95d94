use super::*;
use crate::animation::tween::AnimatableProperty;

fn frames(raw: serde_json::Value) -> Vec<KeyframeMap> {
    serde_json::from_value(raw).unwrap()
}

fn build(raw: serde_json::Value) -> AnimationTracks {
    build_animation(&frames(raw), &ValueParser::default(), false).unwrap()
}

#[test]
fn empty_sequence_is_no_animation() {
    assert!(build_animation(&[], &ValueParser::default(), false).is_none());
}

#[test]
fn opacity_track_from_two_frames() {
    let tracks = build(serde_json::json!([
        {"time": "0", "opacity": "0"},
        {"time": "100", "opacity": "1"}
    ]));
    assert_eq!(tracks.len(), 1);
    let opacity = tracks.float(AnimatableProperty::Opacity).unwrap();
    let times: Vec<f64> = opacity.keys().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 1.0]);
}

#[test]
fn map_without_time_is_skipped() {
    let tracks = build(serde_json::json!([
        {"time": "0", "width": "10px"},
        {"width": "999px", "height": "5px"},
        {"time": "100", "width": "20px"}
    ]));
    assert!(tracks.float(AnimatableProperty::Height).is_none());
    let width = tracks.float(AnimatableProperty::Width).unwrap();
    let values: Vec<f64> = width.keys().iter().map(|k| k.value).collect();
    assert_eq!(values, vec![10.0, 20.0]);
}

#[test]
fn uniform_scale_produces_combined_track() {
    let tracks = build(serde_json::json!([
        {"time": "0", "transform": "{\"scale\":\"1\"}"},
        {"time": "100", "transform": "{\"scale\":\"2\"}"}
    ]));
    assert!(tracks.float(AnimatableProperty::Scale).is_some());
    assert!(tracks.get(AnimatableProperty::ScaleX).is_none());
    assert_eq!(tracks.max_scale_xy, Some(2.0));
}

#[test]
fn diverging_scale_splits_per_axis() {
    let tracks = build(serde_json::json!([
        {"time": "0", "scale": "1"},
        {"time": "100", "scale": "2 3"}
    ]));
    assert!(tracks.get(AnimatableProperty::Scale).is_none());
    assert_eq!(tracks.float(AnimatableProperty::ScaleX).unwrap().len(), 2);
    assert_eq!(
        tracks.float(AnimatableProperty::ScaleY).unwrap().sample(1.0),
        Some(3.0)
    );
    assert_eq!(tracks.max_scale_xy, Some(3.0));
}

#[test]
fn per_axis_keyframe_disables_uniform_scale() {
    let tracks = build(serde_json::json!([
        {"time": "0", "scale": "1"},
        {"time": "50", "scaleX": "4"},
        {"time": "100", "scale": "2"}
    ]));
    assert!(tracks.get(AnimatableProperty::Scale).is_none());
    assert_eq!(tracks.float(AnimatableProperty::ScaleX).unwrap().len(), 1);
    assert_eq!(tracks.float(AnimatableProperty::ScaleY).unwrap().len(), 2);
}

#[test]
fn single_translate_is_horizontal() {
    let tracks = build(serde_json::json!([
        {"time": "0", "translate": "0px"},
        {"time": "100", "translate": "30%"}
    ]));
    let t = tracks.offset(AnimatableProperty::Translate).unwrap();
    let last = t.sample(1.0).unwrap();
    assert_eq!(last.x, Dimension::percent(0.3));
    assert_eq!(last.y, Dimension::percent(0.0));
}

#[test]
fn margin_shorthand_feeds_all_edges() {
    let tracks = build(serde_json::json!([
        {"time": "0", "margin": "1px 2px"},
        {"time": "100", "marginStart": "8px"}
    ]));
    assert_eq!(tracks.float(AnimatableProperty::MarginTop).unwrap().len(), 1);
    assert_eq!(tracks.float(AnimatableProperty::MarginLeft).unwrap().len(), 2);
    assert_eq!(tracks.float(AnimatableProperty::MarginRight).unwrap().len(), 1);
}

#[test]
fn start_maps_to_right_in_rtl() {
    let maps = frames(serde_json::json!([{"time": "0", "paddingStart": "4px"}]));
    let tracks = build_animation(&maps, &ValueParser::default(), true).unwrap();
    assert!(tracks.float(AnimatableProperty::PaddingRight).is_some());
    assert!(tracks.float(AnimatableProperty::PaddingLeft).is_none());
}

#[test]
fn unknown_keys_leave_no_placeholder_tracks() {
    let tracks = build(serde_json::json!([{"time": "0", "fontWeight": "bold"}]));
    assert!(tracks.is_empty());
}

#[test]
fn keyframe_time_reports_animation_errors() {
    let ok = frames(serde_json::json!([{"time": "50%"}]));
    assert_eq!(keyframe_time(&ok[0]).unwrap(), 0.5);

    let bad = frames(serde_json::json!([{"opacity": "1"}, {"time": "soon"}]));
    for frame in &bad {
        let err = keyframe_time(frame).unwrap_err();
        assert!(matches!(err, DomError::Animation(_)));
    }
}
