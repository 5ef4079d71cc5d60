use crate::{
    compute::buffer::Buffer2D,
    foundation::error::{BoardError, BoardResult},
};

/// Pass output binding.
///
/// A target borrows one [`Buffer2D`] exclusively for the duration of a
/// pass; dropping the target restores the previous binding state (the
/// borrow ends and the buffer becomes plain data again). All pass output
/// and all readback go through a target; kernels never touch buffer
/// storage directly.
pub struct RenderTarget<'a> {
    buffer: &'a mut Buffer2D,
}

impl<'a> RenderTarget<'a> {
    /// Bind `buffer` as the output of a pass.
    ///
    /// Fails with [`BoardError::EmptyGrid`] when the buffer has no size,
    /// before anything is dispatched.
    pub fn bind(buffer: &'a mut Buffer2D) -> BoardResult<Self> {
        if buffer.is_empty() {
            return Err(BoardError::empty_grid("cannot bind a zero-sized buffer"));
        }
        Ok(Self { buffer })
    }

    pub(crate) fn frame(&mut self) -> TargetFrame<'_> {
        TargetFrame {
            width: self.buffer.width(),
            height: self.buffer.height(),
            channels: self.buffer.format().channels(),
            data: self.buffer.data_mut(),
        }
    }

    /// Read a buffer back as RGBA bytes, the only readback path.
    ///
    /// Missing channels are expanded the same way sampling expands them
    /// (alpha 255, R8 replicated as luminance). `out` must hold exactly
    /// `width * height * 4` bytes.
    pub fn read_rgba(buffer: &Buffer2D, out: &mut [u8]) -> BoardResult<()> {
        if buffer.is_empty() {
            return Err(BoardError::empty_grid("cannot read a zero-sized buffer"));
        }
        let cells = buffer.width() as usize * buffer.height() as usize;
        let expected = cells * 4;
        if out.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: out.len(),
            });
        }

        let channels = buffer.format().channels();
        let data = buffer.data();
        for cell in 0..cells {
            let src = cell * channels;
            let dst = cell * 4;
            match channels {
                1 => {
                    let v = data[src];
                    out[dst] = v;
                    out[dst + 1] = v;
                    out[dst + 2] = v;
                    out[dst + 3] = 255;
                }
                3 => {
                    out[dst..dst + 3].copy_from_slice(&data[src..src + 3]);
                    out[dst + 3] = 255;
                }
                _ => out[dst..dst + 4].copy_from_slice(&data[src..src + 4]),
            }
        }
        Ok(())
    }
}

/// Mutable storage window handed to a dispatch.
pub(crate) struct TargetFrame<'a> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) channels: usize,
    pub(crate) data: &'a mut [u8],
}

#[cfg(test)]
#[path = "../../tests/unit/compute/target.rs"]
mod tests;
