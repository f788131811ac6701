use super::*;

#[test]
fn ctor_helpers_map_to_variants() {
    assert!(matches!(
        GnomonError::validation("x"),
        GnomonError::Validation(_)
    ));
    assert!(matches!(GnomonError::render("x"), GnomonError::Render(_)));
}

#[test]
fn display_includes_the_message() {
    let e = GnomonError::validation("palette len must be > 0");
    assert_eq!(e.to_string(), "validation error: palette len must be > 0");
}

#[test]
fn anyhow_errors_pass_through() {
    let e: GnomonError = anyhow::anyhow!("disk on fire").into();
    assert!(matches!(e, GnomonError::Other(_)));
    assert_eq!(e.to_string(), "disk on fire");
}
