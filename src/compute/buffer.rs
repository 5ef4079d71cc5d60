use crate::{
    compute::context::ComputeContext,
    foundation::error::{BoardError, BoardResult},
};

/// Channel layout of one buffer element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelFormat {
    /// Single channel, sampled as luminance `(v, v, v, 1)`.
    R8,
    /// Three channels, sampled as `(r, g, b, 1)`.
    Rgb8,
    /// Four channels.
    Rgba8,
}

impl ChannelFormat {
    /// Bytes per element for this format.
    pub fn channels(self) -> usize {
        match self {
            ChannelFormat::R8 => 1,
            ChannelFormat::Rgb8 => 3,
            ChannelFormat::Rgba8 => 4,
        }
    }
}

/// Sampling filter attribute of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Pick the closest element; cell and rule data must stay blocky.
    Nearest,
    /// Blend the four closest elements.
    Linear,
}

/// A device-resident 2D array of fixed-point (u8) channel values.
///
/// A buffer is rebindable: both its content and its resolution can be
/// replaced after creation. Uploads are validated against the declared
/// layout before any byte is written, so a failed upload leaves the buffer
/// untouched.
#[derive(Clone, Debug)]
pub struct Buffer2D {
    width: u32,
    height: u32,
    format: ChannelFormat,
    filter: FilterMode,
    data: Vec<u8>,
}

impl Buffer2D {
    /// Create an empty (0×0) buffer; size it with [`Buffer2D::set_data`].
    pub fn new(_ctx: &ComputeContext, format: ChannelFormat, filter: FilterMode) -> Self {
        Self {
            width: 0,
            height: 0,
            format,
            filter,
            data: Vec::new(),
        }
    }

    /// Element columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Element rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of each element.
    pub fn format(&self) -> ChannelFormat {
        self.format
    }

    /// Sampling filter attribute.
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn expected_len(&self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.format.channels()
    }

    /// Replace resolution and content. `None` fills the buffer with zeroes
    /// (every channel dead).
    pub fn set_data(&mut self, width: u32, height: u32, data: Option<&[u8]>) -> BoardResult<()> {
        let expected = self.expected_len(width, height);
        match data {
            Some(bytes) => {
                if bytes.len() != expected {
                    return Err(BoardError::SizeMismatch {
                        expected,
                        actual: bytes.len(),
                    });
                }
                self.data.clear();
                self.data.extend_from_slice(bytes);
            }
            None => {
                self.data.clear();
                self.data.resize(expected, 0);
            }
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Replace content without modifying the resolution.
    pub fn update_data(&mut self, data: &[u8]) -> BoardResult<()> {
        let expected = self.expected_len(self.width, self.height);
        if data.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        self.data.copy_from_slice(data);
        Ok(())
    }

    pub(crate) fn view(&self) -> BufferView<'_> {
        BufferView {
            width: self.width,
            height: self.height,
            format: self.format,
            filter: self.filter,
            data: &self.data,
        }
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Read-only sampling view over a bound input buffer.
///
/// Coordinates are normalized to `[0, 1]` over each axis, addressing is
/// clamp-to-edge; out-of-range coordinates never wrap here. Toroidal wrap
/// is the program's job (reduce the coordinate mod 1 before sampling).
#[derive(Clone, Copy, Debug)]
pub struct BufferView<'a> {
    width: u32,
    height: u32,
    format: ChannelFormat,
    filter: FilterMode,
    data: &'a [u8],
}

impl BufferView<'_> {
    /// Element columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Element rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fetch one element by integer index, expanded to normalized RGBA.
    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        let channels = self.format.channels();
        let base = (y as usize * self.width as usize + x as usize) * channels;
        let norm = |b: u8| f32::from(b) / 255.0;
        match self.format {
            ChannelFormat::R8 => {
                let v = norm(self.data[base]);
                [v, v, v, 1.0]
            }
            ChannelFormat::Rgb8 => [
                norm(self.data[base]),
                norm(self.data[base + 1]),
                norm(self.data[base + 2]),
                1.0,
            ],
            ChannelFormat::Rgba8 => [
                norm(self.data[base]),
                norm(self.data[base + 1]),
                norm(self.data[base + 2]),
                norm(self.data[base + 3]),
            ],
        }
    }

    /// Sample at a normalized coordinate with the buffer's filter attribute.
    pub fn sample(&self, x: f32, y: f32) -> [f32; 4] {
        match self.filter {
            FilterMode::Nearest => self.sample_nearest(x, y),
            FilterMode::Linear => self.sample_linear(x, y),
        }
    }

    fn clamp_index(t: f32, len: u32) -> u32 {
        let max = len.saturating_sub(1) as f32;
        t.clamp(0.0, max) as u32
    }

    fn sample_nearest(&self, x: f32, y: f32) -> [f32; 4] {
        let ix = Self::clamp_index((x * self.width as f32).floor(), self.width);
        let iy = Self::clamp_index((y * self.height as f32).floor(), self.height);
        self.texel(ix, iy)
    }

    fn sample_linear(&self, x: f32, y: f32) -> [f32; 4] {
        let tx = x * self.width as f32 - 0.5;
        let ty = y * self.height as f32 - 0.5;
        let x0 = Self::clamp_index(tx.floor(), self.width);
        let y0 = Self::clamp_index(ty.floor(), self.height);
        let x1 = Self::clamp_index(tx.floor() + 1.0, self.width);
        let y1 = Self::clamp_index(ty.floor() + 1.0, self.height);
        let fx = (tx - tx.floor()).clamp(0.0, 1.0);
        let fy = (ty - ty.floor()).clamp(0.0, 1.0);

        let mut out = [0.0f32; 4];
        let c00 = self.texel(x0, y0);
        let c10 = self.texel(x1, y0);
        let c01 = self.texel(x0, y1);
        let c11 = self.texel(x1, y1);
        for ch in 0..4 {
            let top = c00[ch] * (1.0 - fx) + c10[ch] * fx;
            let bottom = c01[ch] * (1.0 - fx) + c11[ch] * fx;
            out[ch] = top * (1.0 - fy) + bottom * fy;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compute/buffer.rs"]
mod tests;
