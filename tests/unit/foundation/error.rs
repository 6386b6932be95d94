use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DomError::parse("x").to_string().contains("parse error:"));
    assert!(
        DomError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        DomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = DomError::from(err);
    assert!(matches!(err, DomError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
