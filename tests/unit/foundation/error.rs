use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SplashError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        SplashError::missing_resource("x")
            .to_string()
            .contains("missing resource:")
    );
    assert!(
        SplashError::animation_state("x")
            .to_string()
            .contains("animation state error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SplashError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
