use super::*;

#[test]
fn dimension_units_parse() {
    assert_eq!(Dimension::try_parse("100px").unwrap(), Dimension::px(100.0));
    assert_eq!(
        Dimension::try_parse("10vp").unwrap(),
        Dimension::new(10.0, DimensionUnit::Vp)
    );
    assert_eq!(
        Dimension::try_parse("12fp").unwrap(),
        Dimension::new(12.0, DimensionUnit::Fp)
    );
    assert_eq!(Dimension::try_parse(" 42 ").unwrap(), Dimension::px(42.0));
    assert_eq!(Dimension::try_parse("50%").unwrap(), Dimension::percent(0.5));
}

#[test]
fn dimension_rejects_garbage() {
    assert!(Dimension::try_parse("").is_err());
    assert!(Dimension::try_parse("wide").is_err());
    assert!(Dimension::try_parse("inf").is_err());
}

#[test]
fn negative_dimension_is_unset() {
    assert!(!Dimension::px(-1.0).is_valid());
    assert!(Dimension::px(0.0).is_valid());
}

#[test]
fn color_hex_forms() {
    assert_eq!(Color::try_parse("#FF0000").unwrap(), Color::rgba(255, 0, 0, 255));
    assert_eq!(Color::try_parse("#0f0").unwrap(), Color::rgba(0, 255, 0, 255));
    assert_eq!(
        Color::try_parse("#80112233").unwrap(),
        Color::rgba(0x11, 0x22, 0x33, 0x80)
    );
    assert!(Color::try_parse("#12345").is_err());
}

#[test]
fn color_functional_forms() {
    assert_eq!(
        Color::try_parse("rgb(1, 2, 3)").unwrap(),
        Color::rgba(1, 2, 3, 255)
    );
    assert_eq!(
        Color::try_parse("rgba(10,20,30,0.5)").unwrap(),
        Color::rgba(10, 20, 30, 128)
    );
    assert_eq!(
        Color::try_parse("hsl(0, 100%, 50%)").unwrap(),
        Color::rgba(255, 0, 0, 255)
    );
    assert_eq!(Color::try_parse("White").unwrap(), Color::WHITE);
    assert!(Color::try_parse("rgb(1,2)").is_err());
    assert!(Color::try_parse("chartreuse-ish").is_err());
}

#[test]
fn default_color_is_transparent() {
    assert_eq!(Color::default(), Color::TRANSPARENT);
}

#[test]
fn shorthand_expansion_follows_css_order() {
    let one = Edges::from_shorthand(&[1]).unwrap();
    assert_eq!((one.top, one.right, one.bottom, one.left), (1, 1, 1, 1));

    let two = Edges::from_shorthand(&[1, 2]).unwrap();
    assert_eq!((two.top, two.right, two.bottom, two.left), (1, 2, 1, 2));

    let three = Edges::from_shorthand(&[1, 2, 3]).unwrap();
    assert_eq!((three.top, three.right, three.bottom, three.left), (1, 2, 3, 2));

    let four = Edges::from_shorthand(&[1, 2, 3, 4]).unwrap();
    assert_eq!((four.top, four.right, four.bottom, four.left), (1, 2, 3, 4));

    assert!(Edges::<i32>::from_shorthand(&[]).is_none());
    assert!(Edges::from_shorthand(&[1, 2, 3, 4, 5]).is_none());
}

#[test]
fn border_edge_defaults() {
    let edge = BorderEdge::default();
    assert_eq!(edge.color, Color::BLACK);
    assert_eq!(edge.style, BorderStyle::Solid);
    assert_eq!(edge.width, Dimension::px(0.0));
    assert_eq!(BorderStyle::parse("dashed"), Some(BorderStyle::Dashed));
    assert_eq!(BorderStyle::parse("wavy"), None);
}
