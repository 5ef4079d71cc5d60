use super::*;

fn ctx() -> ComputeContext {
    ComputeContext::new()
}

#[test]
fn upload_is_validated_before_any_write() {
    let mut buffer = Buffer2D::new(&ctx(), ChannelFormat::Rgb8, FilterMode::Nearest);
    buffer.set_data(2, 2, Some(&[9u8; 12])).unwrap();

    let err = buffer.set_data(3, 3, Some(&[0u8; 5])).unwrap_err();
    assert!(matches!(
        err,
        BoardError::SizeMismatch {
            expected: 27,
            actual: 5
        }
    ));

    // The failed upload left dimensions and content alone.
    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 2);
    assert_eq!(buffer.view().texel(1, 1)[0], 9.0 / 255.0);

    let err = buffer.update_data(&[0u8; 3]).unwrap_err();
    assert!(matches!(err, BoardError::SizeMismatch { expected: 12, .. }));
}

#[test]
fn rebinding_replaces_resolution_and_content() {
    let mut buffer = Buffer2D::new(&ctx(), ChannelFormat::R8, FilterMode::Nearest);
    assert!(buffer.is_empty());

    buffer.set_data(4, 1, Some(&[1, 2, 3, 4])).unwrap();
    assert_eq!((buffer.width(), buffer.height()), (4, 1));

    buffer.set_data(2, 3, None).unwrap();
    assert_eq!((buffer.width(), buffer.height()), (2, 3));
    assert_eq!(buffer.view().texel(1, 2)[0], 0.0);
}

#[test]
fn r8_samples_as_luminance() {
    let mut buffer = Buffer2D::new(&ctx(), ChannelFormat::R8, FilterMode::Nearest);
    buffer.set_data(1, 1, Some(&[255])).unwrap();
    assert_eq!(buffer.view().texel(0, 0), [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn nearest_sampling_is_blocky_and_clamps_at_the_edge() {
    let mut buffer = Buffer2D::new(&ctx(), ChannelFormat::R8, FilterMode::Nearest);
    buffer.set_data(2, 1, Some(&[0, 255])).unwrap();

    let view = buffer.view();
    assert_eq!(view.sample(0.25, 0.5)[0], 0.0);
    assert_eq!(view.sample(0.75, 0.5)[0], 1.0);
    // Out-of-range coordinates clamp instead of wrapping.
    assert_eq!(view.sample(1.5, 0.5)[0], 1.0);
    assert_eq!(view.sample(-0.5, 0.5)[0], 0.0);
}

#[test]
fn linear_sampling_blends_between_elements() {
    let mut buffer = Buffer2D::new(&ctx(), ChannelFormat::R8, FilterMode::Linear);
    buffer.set_data(2, 1, Some(&[0, 255])).unwrap();

    let mid = buffer.view().sample(0.5, 0.5)[0];
    assert!((mid - 0.5).abs() < 1e-3, "expected a midpoint blend, got {mid}");
}
