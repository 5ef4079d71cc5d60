use super::*;
use crate::compute::{
    buffer::{ChannelFormat, FilterMode},
    context::ComputeContext,
};
use crate::foundation::error::BoardError;

#[test]
fn binding_a_zero_sized_buffer_fails_before_dispatch() {
    let ctx = ComputeContext::new();
    let mut buffer = Buffer2D::new(&ctx, ChannelFormat::Rgb8, FilterMode::Nearest);
    let err = RenderTarget::bind(&mut buffer).map(|_| ()).unwrap_err();
    assert!(matches!(err, BoardError::EmptyGrid(_)));
}

#[test]
fn readback_expands_missing_channels() {
    let ctx = ComputeContext::new();
    let mut buffer = Buffer2D::new(&ctx, ChannelFormat::R8, FilterMode::Nearest);
    buffer.set_data(2, 1, Some(&[0, 255])).unwrap();

    let mut out = [1u8; 8];
    RenderTarget::read_rgba(&buffer, &mut out).unwrap();
    assert_eq!(out, [0, 0, 0, 255, 255, 255, 255, 255]);
}

#[test]
fn readback_length_is_validated() {
    let ctx = ComputeContext::new();
    let mut buffer = Buffer2D::new(&ctx, ChannelFormat::Rgb8, FilterMode::Nearest);
    buffer.set_data(2, 2, None).unwrap();

    let mut out = [0u8; 3];
    let err = RenderTarget::read_rgba(&buffer, &mut out).unwrap_err();
    assert!(matches!(
        err,
        BoardError::SizeMismatch {
            expected: 16,
            actual: 3
        }
    ));

    let empty = Buffer2D::new(&ctx, ChannelFormat::Rgb8, FilterMode::Nearest);
    let err = RenderTarget::read_rgba(&empty, &mut []).unwrap_err();
    assert!(matches!(err, BoardError::EmptyGrid(_)));
}
