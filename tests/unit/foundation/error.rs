use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoardError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(BoardError::empty_grid("x").to_string().contains("empty grid:"));
    assert!(
        BoardError::malformed_snapshot("x")
            .to_string()
            .contains("malformed snapshot:")
    );
    assert_eq!(
        BoardError::SizeMismatch {
            expected: 12,
            actual: 7
        }
        .to_string(),
        "size mismatch: expected 12 elements, got 7"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
